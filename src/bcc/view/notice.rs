use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum NoticeLevel {
    Info,
    Warning,
    Error,
}

/// A message for the user about the result of an action
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    pub fn new(level: NoticeLevel, message: impl Into<String>) -> Self {
        return Self {
            level,
            message: message.into(),
        };
    }

    pub fn info(message: impl Into<String>) -> Self {
        return Self::new(NoticeLevel::Info, message);
    }

    pub fn warning(message: impl Into<String>) -> Self {
        return Self::new(NoticeLevel::Warning, message);
    }

    pub fn error(message: impl Into<String>) -> Self {
        return Self::new(NoticeLevel::Error, message);
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        return match self.level {
            NoticeLevel::Info => write!(f, "{}", self.message),
            NoticeLevel::Warning => write!(f, "warning: {}", self.message),
            NoticeLevel::Error => write!(f, "error: {}", self.message),
        };
    }
}
