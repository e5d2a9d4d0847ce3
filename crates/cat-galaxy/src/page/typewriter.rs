/// Reveals a string one character at a time.
///
/// The host clears the target element, appends the first character at once
/// and then one more per `delay_ms` until `is_done`.
#[derive(Debug, Clone)]
pub struct Typewriter {
    chars: Vec<char>,
    revealed: usize,
    delay_ms: u32,
}

impl Typewriter {
    pub fn new(text: &str, delay_ms: u32) -> Self {
        Self {
            chars: text.chars().collect(),
            revealed: 0,
            delay_ms,
        }
    }

    /// The next character to append, or `None` once the text is complete.
    pub fn next_char(&mut self) -> Option<char> {
        let c = self.chars.get(self.revealed).copied()?;
        self.revealed += 1;
        Some(c)
    }

    pub fn revealed_text(&self) -> String {
        self.chars[..self.revealed].iter().collect()
    }

    pub fn revealed(&self) -> usize {
        self.revealed
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    pub fn is_done(&self) -> bool {
        self.revealed == self.chars.len()
    }

    pub fn delay_ms(&self) -> u32 {
        self.delay_ms
    }

    /// Characters visible `elapsed_ms` after typing started.
    pub fn revealed_after(&self, elapsed_ms: u64) -> usize {
        if self.chars.is_empty() {
            return 0;
        }
        let steps = match self.delay_ms {
            0 => self.chars.len() as u64,
            d => elapsed_ms / u64::from(d) + 1,
        };
        steps.min(self.chars.len() as u64) as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn types_whole_headline() {
        let mut tw = Typewriter::new("WELCOME TO THE CAT GALAXY", 50);
        let mut out = String::new();
        while let Some(c) = tw.next_char() {
            out.push(c);
        }
        assert_eq!(out, "WELCOME TO THE CAT GALAXY");
        assert!(tw.is_done());
        assert_eq!(tw.revealed_text(), out);
        assert_eq!(tw.next_char(), None);
    }

    #[test]
    fn reveal_schedule_follows_delay() {
        let tw = Typewriter::new("WELCOME TO THE CAT GALAXY", 50);
        assert_eq!(tw.revealed_after(0), 1);
        assert_eq!(tw.revealed_after(49), 1);
        assert_eq!(tw.revealed_after(50), 2);
        assert_eq!(tw.revealed_after(175), 4);
        assert_eq!(tw.revealed_after(24 * 50), 25);
        assert_eq!(tw.revealed_after(10_000), 25);
    }

    #[test]
    fn multibyte_text_counts_chars() {
        let mut tw = Typewriter::new("gato 🐱", 10);
        assert_eq!(tw.len(), 6);
        for _ in 0..6 {
            tw.next_char();
        }
        assert_eq!(tw.revealed_text(), "gato 🐱");
    }

    #[test]
    fn empty_text_is_done_immediately() {
        let mut tw = Typewriter::new("", 50);
        assert!(tw.is_empty());
        assert!(tw.is_done());
        assert_eq!(tw.next_char(), None);
        assert_eq!(tw.revealed_after(500), 0);
    }
}
