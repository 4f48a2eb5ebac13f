//! Menu commands.
//!
//! Raw menu input is parsed once into a [`Command`]; dispatch only ever sees
//! the typed value.

/// Highest valid menu choice.
pub const MAX_CHOICE: u32 = 7;

/// Menu shown before every choice.
pub const MENU: &str = "Do you want to:
 1) CREATE_TABLE
 2) ADD_SAMPLE_MOVIES_DATA (uses batch write)
 3) ADD_MOVIE (uses put item)
 4) GET_MOVIE (uses get item)
 5) QUERY_MOVIES (uses query)
 6) SCAN_MOVIES (uses scan)
 7) QUIT";

/// A parsed menu choice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    CreateTable,
    LoadSampleData,
    AddMovie,
    GetMovie,
    QueryMovies,
    ScanMovies,
    Quit,
    /// Anything that is not a number between 1 and [`MAX_CHOICE`].
    Invalid(String),
}

impl Command {
    /// Parses a menu choice.
    ///
    /// Surrounding whitespace is ignored. The choice must consist only of
    /// ASCII digits and fall in `1..=MAX_CHOICE`.
    pub fn parse(input: &str) -> Self {
        let choice = input.trim();
        if choice.is_empty() || !choice.bytes().all(|b| b.is_ascii_digit()) {
            return Command::Invalid(choice.to_string());
        }

        match choice.parse::<u32>() {
            Ok(1) => Command::CreateTable,
            Ok(2) => Command::LoadSampleData,
            Ok(3) => Command::AddMovie,
            Ok(4) => Command::GetMovie,
            Ok(5) => Command::QueryMovies,
            Ok(6) => Command::ScanMovies,
            Ok(MAX_CHOICE) => Command::Quit,
            _ => Command::Invalid(choice.to_string()),
        }
    }

    /// Returns true for commands that operate on the current table.
    pub fn needs_table(&self) -> bool {
        matches!(
            self,
            Command::LoadSampleData
                | Command::AddMovie
                | Command::GetMovie
                | Command::QueryMovies
                | Command::ScanMovies
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_every_menu_choice() {
        assert_eq!(Command::parse("1"), Command::CreateTable);
        assert_eq!(Command::parse("2"), Command::LoadSampleData);
        assert_eq!(Command::parse("3"), Command::AddMovie);
        assert_eq!(Command::parse("4"), Command::GetMovie);
        assert_eq!(Command::parse("5"), Command::QueryMovies);
        assert_eq!(Command::parse("6"), Command::ScanMovies);
        assert_eq!(Command::parse("7"), Command::Quit);
    }

    #[test]
    fn test_parse_trims_whitespace() {
        assert_eq!(Command::parse(" 3\n"), Command::AddMovie);
        assert_eq!(Command::parse("7\r\n"), Command::Quit);
    }

    #[test]
    fn test_parse_accepts_leading_zeros() {
        assert_eq!(Command::parse("07"), Command::Quit);
    }

    #[test]
    fn test_parse_rejects_out_of_range() {
        assert_eq!(Command::parse("0"), Command::Invalid("0".to_string()));
        assert_eq!(Command::parse("8"), Command::Invalid("8".to_string()));
        assert_eq!(Command::parse("42"), Command::Invalid("42".to_string()));
    }

    #[test]
    fn test_parse_rejects_non_digits() {
        assert_eq!(Command::parse(""), Command::Invalid(String::new()));
        assert_eq!(Command::parse("-1"), Command::Invalid("-1".to_string()));
        assert_eq!(Command::parse("1.0"), Command::Invalid("1.0".to_string()));
        assert_eq!(Command::parse("quit"), Command::Invalid("quit".to_string()));
        assert_eq!(Command::parse("+3"), Command::Invalid("+3".to_string()));
    }

    #[test]
    fn test_parse_rejects_overflowing_number() {
        let huge = "99999999999999999999";
        assert_eq!(Command::parse(huge), Command::Invalid(huge.to_string()));
    }

    #[test]
    fn test_needs_table() {
        assert!(!Command::CreateTable.needs_table());
        assert!(Command::LoadSampleData.needs_table());
        assert!(Command::AddMovie.needs_table());
        assert!(Command::GetMovie.needs_table());
        assert!(Command::QueryMovies.needs_table());
        assert!(Command::ScanMovies.needs_table());
        assert!(!Command::Quit.needs_table());
        assert!(!Command::Invalid("x".to_string()).needs_table());
    }
}
