//! Output trait for rendering reports.

use owo_colors::OwoColorize;

/// Target output for reports.
///
/// Reports describe *what* to output using these semantic methods.
/// Implementations decide *how* to render.
pub trait Output {
    /// Start a section with a heading.
    fn section(&mut self, name: &str);

    /// Render a key-value pair.
    fn key_value(&mut self, key: &str, value: &str);

    /// Render a numbered list item.
    fn numbered_item(&mut self, index: usize, text: &str);

    /// Render a warning message.
    fn warning(&mut self, msg: &str);

    /// Render a closing success line.
    fn success(&mut self, msg: &str);

    /// Render a separator with a label.
    fn divider(&mut self, label: &str);

    /// Render a block of preformatted text.
    fn preformatted(&mut self, text: &str);

    /// Render a blank line.
    fn newline(&mut self);
}

/// A report that can render itself to an output.
pub trait Report {
    /// Render this report to the given output.
    fn render(&self, out: &mut dyn Output);
}

/// Terminal output implementation.
pub struct TerminalOutput;

impl TerminalOutput {
    pub fn new() -> Self {
        Self
    }
}

impl Default for TerminalOutput {
    fn default() -> Self {
        Self::new()
    }
}

impl Output for TerminalOutput {
    fn section(&mut self, name: &str) {
        println!("{}:", name);
    }

    fn key_value(&mut self, key: &str, value: &str) {
        println!("{}: {}", key, value);
    }

    fn numbered_item(&mut self, index: usize, text: &str) {
        println!("[{}] {}", index.yellow(), text.green());
    }

    fn warning(&mut self, msg: &str) {
        eprintln!("{} {}", "warning:".yellow(), msg);
    }

    fn success(&mut self, msg: &str) {
        println!("{}", msg.green());
    }

    fn divider(&mut self, label: &str) {
        println!("── {} ──", label);
    }

    fn preformatted(&mut self, text: &str) {
        println!("{}", text);
    }

    fn newline(&mut self) {
        println!();
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::Output;

    /// Records every call so report rendering can be asserted on.
    #[derive(Default)]
    pub struct RecordingOutput {
        pub lines: Vec<String>,
    }

    impl Output for RecordingOutput {
        fn section(&mut self, name: &str) {
            self.lines.push(format!("section:{name}"));
        }

        fn key_value(&mut self, key: &str, value: &str) {
            self.lines.push(format!("kv:{key}={value}"));
        }

        fn numbered_item(&mut self, index: usize, text: &str) {
            self.lines.push(format!("item:{index}:{text}"));
        }

        fn warning(&mut self, msg: &str) {
            self.lines.push(format!("warning:{msg}"));
        }

        fn success(&mut self, msg: &str) {
            self.lines.push(format!("success:{msg}"));
        }

        fn divider(&mut self, label: &str) {
            self.lines.push(format!("divider:{label}"));
        }

        fn preformatted(&mut self, text: &str) {
            self.lines.push(format!("pre:{text}"));
        }

        fn newline(&mut self) {
            self.lines.push(String::new());
        }
    }
}
