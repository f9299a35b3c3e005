use crate::config::MorentConfig;
use crate::model::Car;
use crate::wishlist::WishlistEntry;

pub mod browse;
pub mod config;
pub mod helpers;
pub mod show;
pub mod wishlist;

pub use self::config::ConfigAction;

#[derive(Debug, Clone)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// Structured result returned by every command: data for the presentation
/// layer plus user-facing messages. Commands never print.
#[derive(Debug, Default)]
pub struct CmdResult {
    pub listed_cars: Vec<Car>,
    pub car: Option<Car>,
    pub wishlist: Vec<WishlistEntry>,
    pub config: Option<MorentConfig>,
    /// Reasons for records excluded at the decode boundary.
    pub skipped: Vec<String>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_listed_cars(mut self, cars: Vec<Car>) -> Self {
        self.listed_cars = cars;
        self
    }

    pub fn with_car(mut self, car: Car) -> Self {
        self.car = Some(car);
        self
    }

    pub fn with_wishlist(mut self, entries: Vec<WishlistEntry>) -> Self {
        self.wishlist = entries;
        self
    }

    pub fn with_config(mut self, config: MorentConfig) -> Self {
        self.config = Some(config);
        self
    }
}
