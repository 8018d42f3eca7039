//! Chat log export as a standalone HTML page

use crate::domain::ChatLog;
use crate::markdown::{escape_html, render_message_html};
use std::fs;
use std::io;
use std::path::Path;
use tracing::info;

const STYLE: &str = "body{font-family:system-ui,sans-serif;max-width:52rem;margin:2rem auto;color:#1f2430}\
.message{margin:.75rem 0;padding:.6rem .9rem;border-radius:.5rem}\
.message.user{background:#e8f0fe;margin-left:4rem}\
.message.system{background:#f3f4f6;margin-right:4rem}\
.message time{display:block;font-size:.75rem;color:#6b7280}";

/// Render the whole log as an HTML document.
pub fn render_document(log: &ChatLog, title: &str) -> String {
    let mut html = String::new();
    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n");
    html.push_str(&format!("<title>{}</title>\n", escape_html(title)));
    html.push_str(&format!("<style>{STYLE}</style>\n</head>\n<body>\n"));
    html.push_str("<div id=\"chat-messages\">\n");
    for message in log.messages() {
        html.push_str(&format!(
            "<div class=\"message {role}\"><time>{time}</time><div class=\"message-content\">{body}</div></div>\n",
            role = message.role().as_str(),
            time = message.created_at().format("%Y-%m-%d %H:%M:%S"),
            body = render_message_html(message),
        ));
    }
    html.push_str("</div>\n</body>\n</html>\n");
    html
}

/// Write the rendered log to `path`, creating parent directories.
pub fn write_document(log: &ChatLog, path: &Path) -> io::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, render_document(log, "sqlviz chat log"))?;
    info!(path = %path.display(), messages = log.len(), "Exported chat log");
    Ok(())
}
