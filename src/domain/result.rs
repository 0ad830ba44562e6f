//! Result type alias for the seeder

use super::errors::SeederError;

/// Result type alias for seeder operations
///
/// # Examples
///
/// ```
/// use student_seeder::domain::result::Result;
/// use student_seeder::domain::errors::SeederError;
///
/// fn example_function() -> Result<String> {
///     Ok("success".to_string())
/// }
///
/// fn failing_function() -> Result<()> {
///     Err(SeederError::Validation("Invalid input".to_string()))
/// }
/// ```
pub type Result<T> = std::result::Result<T, SeederError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_result_with_question_mark() -> Result<()> {
        fn inner() -> Result<i32> {
            Ok(42)
        }

        let value = inner()?;
        assert_eq!(value, 42);
        Ok(())
    }

    #[test]
    fn test_result_err() {
        let result: Result<i32> = Err(SeederError::Validation("test error".to_string()));
        assert!(result.is_err());
    }
}
