// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Sidepanel-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Sidepanel and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! HTML rendering for the two panel views.
//!
//! The store persists raw text; everything user-controlled is escaped here,
//! at render time.

use std::fmt::Write as _;

use chrono::Local;

use crate::model::Session;

const STYLE: &str = "\
:root {
  --background-color: #121212;
  --surface-color: #1e1e1e;
  --primary-color: #bb86fc;
  --text-color: #e1e1e1;
  --border-color: #333333;
  --error-color: #cf6679;
}
body {
  font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, Helvetica, Arial, sans-serif;
  background-color: var(--background-color);
  color: var(--text-color);
  margin: 0;
  padding: 20px;
}
.container { width: 100%; max-width: 600px; margin: 0 auto; }
.header { text-align: center; margin-bottom: 30px; border-bottom: 1px solid var(--border-color); padding-bottom: 20px; }
.header h1 { margin: 0; font-size: 1.5em; font-weight: 500; }
.card { background-color: var(--surface-color); border-radius: 8px; padding: 20px; border: 1px solid var(--border-color); margin-bottom: 20px; }
.card h2 { margin-top: 0; border-bottom: 1px solid var(--border-color); padding-bottom: 10px; font-weight: 400; }
.form-group { margin-bottom: 15px; }
.form-group label { display: block; margin-bottom: 5px; font-size: 0.9em; color: #b3b3b3; }
.form-control { width: 100%; padding: 10px; background-color: var(--background-color); border: 1px solid var(--border-color); border-radius: 4px; color: var(--text-color); box-sizing: border-box; font-size: 1em; }
textarea.form-control { min-height: 100px; resize: vertical; }
.btn { display: inline-block; width: 100%; padding: 12px; border: none; border-radius: 4px; font-size: 1em; font-weight: bold; cursor: pointer; }
.btn-primary { background-color: var(--primary-color); color: #000; }
.btn-danger { background-color: var(--error-color); color: #000; padding: 5px 10px; font-size: 0.8em; width: auto; }
.hint { font-size: 0.9em; color: #b3b3b3; margin-top: -10px; margin-bottom: 20px; }
.question-list { list-style: none; padding: 0; }
.question-item { background-color: var(--background-color); padding: 15px; border: 1px solid var(--border-color); border-radius: 4px; margin-bottom: 10px; }
.question-item-header { display: flex; justify-content: space-between; align-items: center; margin-bottom: 10px; }
.question-time { font-size: 0.8em; color: #888; }
.question-text { word-wrap: break-word; }
.no-questions { text-align: center; color: #888; padding: 20px; border: 1px dashed var(--border-color); border-radius: 4px; }
.footer { text-align: center; padding-top: 20px; margin-top: 30px; border-top: 1px solid var(--border-color); color: #888; font-size: 0.9em; }
.footer-title { font-weight: bold; color: #aaa; }
";

pub fn render_user_view(session: &Session) -> String {
    let mut main = String::new();
    main.push_str("<div class=\"card\"><h2>Links &amp; Docs</h2><ul></ul></div>\n");
    main.push_str("<div class=\"card\"><h2>Ask a Private Question</h2>\n");
    main.push_str(
        "<p class=\"hint\">Your question will be sent privately to the meeting host.</p>\n",
    );
    main.push_str("<form action=\"/\" method=\"post\">\n");
    main.push_str("<input type=\"hidden\" name=\"action\" value=\"add_question\">\n");
    main.push_str("<div class=\"form-group\">\n");
    main.push_str("<label for=\"question\">Your Question</label>\n");
    main.push_str(
        "<textarea id=\"question\" name=\"question\" class=\"form-control\" required></textarea>\n",
    );
    main.push_str("</div>\n");
    main.push_str("<button type=\"submit\" class=\"btn btn-primary\">Submit Question</button>\n");
    main.push_str("</form></div>\n");

    page_shell(session.title(), &main)
}

pub fn render_admin_view(session: &Session) -> String {
    let mut main = String::new();

    main.push_str("<div class=\"card\"><h2>Admin Controls</h2>\n");
    main.push_str("<form action=\"/?view=admin\" method=\"post\">\n");
    main.push_str("<input type=\"hidden\" name=\"action\" value=\"set_title\">\n");
    main.push_str("<div class=\"form-group\">\n");
    main.push_str("<label for=\"title\">Set Meeting Title</label>\n");
    let _ = writeln!(
        main,
        "<input type=\"text\" id=\"title\" name=\"title\" class=\"form-control\" value=\"{}\">",
        escape_html(session.title())
    );
    main.push_str("</div>\n");
    main.push_str("<button type=\"submit\" class=\"btn btn-primary\">Update Title</button>\n");
    main.push_str("</form></div>\n");

    let _ = writeln!(
        main,
        "<div class=\"card\"><h2>Submitted Questions ({})</h2>",
        session.questions().len()
    );
    if session.questions().is_empty() {
        main.push_str("<p class=\"no-questions\">No questions have been submitted yet.</p>\n");
    } else {
        main.push_str("<ul class=\"question-list\">\n");
        // Newest first for moderation; the delete form still carries the
        // stored position so the store removes the element shown.
        for (index, question) in session.questions().iter().enumerate().rev() {
            main.push_str("<li class=\"question-item\">\n");
            main.push_str("<div class=\"question-item-header\">\n");
            let _ = writeln!(
                main,
                "<span class=\"question-time\">{}</span>",
                escape_html(question.submitted_at().as_str())
            );
            main.push_str("<form action=\"/?view=admin\" method=\"post\">\n");
            main.push_str("<input type=\"hidden\" name=\"action\" value=\"delete_question\">\n");
            let _ = writeln!(
                main,
                "<input type=\"hidden\" name=\"question_index\" value=\"{index}\">"
            );
            main.push_str("<button type=\"submit\" class=\"btn btn-danger\">Delete</button>\n");
            main.push_str("</form></div>\n");
            let _ = writeln!(
                main,
                "<p class=\"question-text\">{}</p>",
                question_text_html(question.text())
            );
            main.push_str("</li>\n");
        }
        main.push_str("</ul>\n");
    }
    main.push_str("</div>\n");

    page_shell(session.title(), &main)
}

fn page_shell(title: &str, main: &str) -> String {
    let escaped_title = escape_html(title);
    let today = Local::now().format("%A, %B %-d, %Y");
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"UTF-8\">\n\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n\
         <title>{escaped_title}</title>\n<style>\n{STYLE}</style>\n</head>\n<body>\n\
         <div class=\"container\">\n<header class=\"header\"><h1>{escaped_title}</h1></header>\n\
         <main>\n{main}</main>\n</div>\n\
         <footer class=\"footer\">\n<div class=\"footer-title\">{escaped_title}</div>\n\
         <div>{today}</div>\n</footer>\n</body>\n</html>\n"
    )
}

pub fn escape_html(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

/// Escape, then turn newlines into `<br>` so multi-line questions keep their
/// line breaks.
pub fn question_text_html(raw: &str) -> String {
    escape_html(raw).replace("\r\n", "\n").replace('\n', "<br>\n")
}
