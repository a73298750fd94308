use crate::view::{AccountTable, Notice, NoticeLevel, Statement};

/// Everything an action produced for the UI layer to present
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Outcome {
    pub notices: Vec<Notice>,

    /// Present when the account list was (re)loaded successfully
    pub table: Option<AccountTable>,

    pub statement: Option<Statement>,
}

impl Outcome {
    pub fn notice(notice: Notice) -> Self {
        return Self {
            notices: vec![notice],
            ..Self::default()
        };
    }

    pub fn table(table: AccountTable) -> Self {
        return Self {
            table: Some(table),
            ..Self::default()
        };
    }

    pub fn statement(statement: Statement) -> Self {
        return Self {
            notices: vec![Notice::info(statement.to_string())],
            statement: Some(statement),
            ..Self::default()
        };
    }

    /// Folds a follow-up reload into this outcome
    pub fn merge(mut self, other: Outcome) -> Self {
        self.notices.extend(other.notices);

        if other.table.is_some() {
            self.table = other.table;
        }

        if other.statement.is_some() {
            self.statement = other.statement;
        }

        return self;
    }

    pub fn is_failure(&self) -> bool {
        return self
            .notices
            .iter()
            .any(|notice| notice.level >= NoticeLevel::Warning);
    }

    /// Message of the first notice, if any
    pub fn message(&self) -> Option<&str> {
        return self.notices.first().map(|notice| notice.message.as_str());
    }
}
