use chrono::Utc;
use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Conversion events the dealer locator reports.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Event {
    DealerSelected,
    PhoneClicked,
    DirectionsClicked,
    WebsiteClicked,
    SearchSubmitted,
}

impl Event {
    pub fn as_str(&self) -> &'static str {
        match self {
            Event::DealerSelected => "Selected Dealer",
            Event::PhoneClicked => "Phone Clicked",
            Event::DirectionsClicked => "Directions Clicked",
            Event::WebsiteClicked => "Website Clicked",
            Event::SearchSubmitted => "Search Submitted",
        }
    }

    fn color(&self) -> Color {
        match self {
            Event::DealerSelected => Color::Green,
            Event::PhoneClicked => Color::Cyan,
            Event::DirectionsClicked => Color::Blue,
            Event::WebsiteClicked => Color::Magenta,
            Event::SearchSubmitted => Color::Yellow,
        }
    }
}

#[derive(Debug, Clone, Copy)]
enum Color {
    Green,
    Blue,
    Yellow,
    Cyan,
    Magenta,
}

impl Color {
    fn to_ansi_code(self) -> &'static str {
        match self {
            Color::Green => "\x1b[32m",
            Color::Blue => "\x1b[34m",
            Color::Yellow => "\x1b[33m",
            Color::Cyan => "\x1b[36m",
            Color::Magenta => "\x1b[35m",
        }
    }
}

/// Appends the locator's conversion events to a per-widget log file.
///
/// The locator treats recording as best effort: a failed write is reported
/// by the caller and never interrupts the UI.
#[derive(Debug, Clone)]
pub struct Analytics {
    log_file: PathBuf,
    category: String,
}

impl Analytics {
    /// Creates a new `Analytics` recorder.
    ///
    /// # Parameters
    /// - `log_dir`: Path to an existing directory for the event log.
    /// - `category`: The widget name used in the log file name and as the
    ///   event category.
    pub fn new(log_dir: &Path, category: &str) -> Result<Self, AnalyticsError> {
        if !log_dir.is_dir() {
            return Err(AnalyticsError::InvalidPath(
                "Provided path is not a directory.".into(),
            ));
        }

        let sanitized = category.replace([' ', '/'], "_").to_lowercase();
        let log_file = log_dir.join(format!("{}_events.log", sanitized));

        OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(&log_file)
            .map_err(AnalyticsError::from)?;

        Ok(Analytics {
            log_file,
            category: category.to_string(),
        })
    }

    /// Records one event with its label (usually the dealer name or the
    /// search query), optionally echoing it to the console in the event's
    /// color.
    pub fn record(&self, event: Event, label: &str, to_console: bool) -> Result<(), AnalyticsError> {
        let timestamp = Utc::now().format("%Y-%m-%d %H:%M:%S").to_string();
        let line = format!(
            "[{}] [{}]: {} - {}\n",
            self.category,
            timestamp,
            event.as_str(),
            label
        );

        if to_console {
            print!("{}{}\x1b[0m", event.color().to_ansi_code(), line);
            io::stdout().flush().map_err(AnalyticsError::from)?;
        }

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.log_file)
            .map_err(AnalyticsError::from)?;
        file.write_all(line.as_bytes()).map_err(AnalyticsError::from)?;
        file.flush().map_err(AnalyticsError::from)?;

        Ok(())
    }
}

#[derive(Debug)]
pub enum AnalyticsError {
    IoError(std::io::Error),
    InvalidPath(String),
}

impl std::fmt::Display for AnalyticsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AnalyticsError::IoError(e) => write!(f, "I/O Error: {}", e),
            AnalyticsError::InvalidPath(msg) => write!(f, "Invalid Path: {}", msg),
        }
    }
}

impl std::error::Error for AnalyticsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AnalyticsError::IoError(e) => Some(e),
            AnalyticsError::InvalidPath(_) => None,
        }
    }
}

impl From<std::io::Error> for AnalyticsError {
    fn from(err: std::io::Error) -> Self {
        AnalyticsError::IoError(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::Path;

    #[test]
    fn test_recording_appends_events() {
        let log_dir = Path::new("/tmp/test_dealer_analytics");
        fs::create_dir_all(log_dir).expect("Failed to create test directory");

        let analytics = Analytics::new(log_dir, "Dealer Locator").expect("Failed to create recorder");
        analytics
            .record(Event::DealerSelected, "Surf City Cycles", false)
            .expect("Failed to record event");
        analytics
            .record(Event::SearchSubmitted, "santa cruz", false)
            .expect("Failed to record event");

        let log_file = log_dir.join("dealer_locator_events.log");
        let contents = fs::read_to_string(&log_file).expect("Failed to read log file");

        assert!(contents.contains("Selected Dealer - Surf City Cycles"));
        assert!(contents.contains("Search Submitted - santa cruz"));
        assert_eq!(contents.lines().count(), 2);

        fs::remove_dir_all(log_dir).expect("Failed to remove test directory");
    }

    #[test]
    fn test_invalid_path_is_rejected() {
        let result = Analytics::new(Path::new("/tmp/definitely/not/a/directory"), "Dealer Locator");
        assert!(matches!(result, Err(AnalyticsError::InvalidPath(_))));
    }
}
