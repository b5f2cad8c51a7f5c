/// One line of shell input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command<'a> {
    /// `/help`
    Help,
    /// `/exit`
    Exit,
    /// `/loglevel:N`. `None` if the line carries no usable number, which
    /// leaves the current level unchanged.
    LogLevel(Option<u8>),
    /// Any other line starting with `/`.
    Unknown(&'a str),
    /// An empty line.
    Empty,
    /// Everything else.
    Expression(&'a str),
}

impl<'a> Command<'a> {
    /// Classifies a line.
    ///
    /// Only exact `/help` and `/exit` lines are recognized. For `/loglevel:`
    /// the first run of digits anywhere in the line is the level.
    ///
    /// # Example
    /// ```
    /// use bigcalc::command::Command;
    ///
    /// assert_eq!(Command::parse("/loglevel:2"), Command::LogLevel(Some(2)));
    /// assert_eq!(Command::parse("/help"), Command::Help);
    /// assert_eq!(Command::parse("/quit"), Command::Unknown("/quit"));
    /// assert_eq!(Command::parse("1 + 2"), Command::Expression("1 + 2"));
    /// ```
    #[must_use]
    pub fn parse(line: &'a str) -> Self {
        match line {
            "" => Self::Empty,
            "/help" => Self::Help,
            "/exit" => Self::Exit,
            _ if line.starts_with("/loglevel:") => Self::LogLevel(first_number(line)),
            _ if line.starts_with('/') => Self::Unknown(line),
            _ => Self::Expression(line),
        }
    }
}

fn first_number(line: &str) -> Option<u8> {
    let start = line.find(|c: char| c.is_ascii_digit())?;
    let digits = &line[start..];
    let end = digits.find(|c: char| !c.is_ascii_digit()).unwrap_or(digits.len());
    digits[..end].parse().ok()
}
