//! The application shell served for every path under the base.

use std::fs;
use std::io;

use crate::config::ServerConfig;
use crate::routing::BasePath;

/// HTML document that boots the client-side application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Shell {
    /// Contents of the configured file, served as-is.
    File(String),
    /// Minimal document with a `<base href>` pointing at the current base.
    Builtin,
}

impl Shell {
    /// Read the configured shell file, or fall back to the built-in document.
    pub fn load(config: &ServerConfig) -> io::Result<Self> {
        match &config.shell_path {
            Some(path) => {
                let html = fs::read_to_string(path)?;
                tracing::info!(path = %path, bytes = html.len(), "Shell document loaded");
                Ok(Shell::File(html))
            }
            None => Ok(Shell::Builtin),
        }
    }

    pub fn render(&self, base: &BasePath) -> String {
        match self {
            Shell::File(html) => html.clone(),
            Shell::Builtin => format!(
                "<!DOCTYPE html>\n\
                 <html>\n\
                 <head>\n\
                 <meta charset=\"utf-8\">\n\
                 <base href=\"{}\">\n\
                 <title>view-router</title>\n\
                 </head>\n\
                 <body>\n\
                 <div id=\"app\"></div>\n\
                 </body>\n\
                 </html>\n",
                base
            ),
        }
    }
}
