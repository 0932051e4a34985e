//! A signed-in user's review of a product.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_with::{DefaultOnError, DisplayFromStr, PickFirst, serde_as};
use thiserror::Error;

/// Lowest rating the review form accepts.
pub const MIN_RATING: f64 = 1.0;
/// Highest rating the review form accepts.
pub const MAX_RATING: f64 = 5.0;

/// A review as stored by the backend.
#[serde_as]
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Review {
    /// Backend identifier.
    #[serde(default)]
    pub id: i64,
    /// Star rating in half steps.
    #[serde_as(as = "PickFirst<(_, DisplayFromStr)>")]
    pub rating: f64,
    /// Free-text comment, possibly empty.
    #[serde(default)]
    pub comment: String,
    /// When the review was written.
    #[serde(default)]
    pub date_created: Option<DateTime<Utc>>,
}

/// Body of the `get-review`, `create-review` and `update-review` endpoints.
///
/// After a delete the backend answers `{"review": {}}`, which reads as no
/// review.
#[serde_as]
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ReviewResponse {
    /// The user's review of the product, if any.
    #[serde_as(as = "DefaultOnError")]
    #[serde(default)]
    pub review: Option<Review>,
}

/// Reasons a review form is rejected before it is sent.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum ReviewError {
    /// The rating is outside [`MIN_RATING`]..=[`MAX_RATING`] or not a half step.
    #[error("rating must be between 1 and 5 stars")]
    InvalidRating,
}

/// Body of the `create-review` and `update-review` endpoints.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ReviewRequest {
    /// Star rating in half steps.
    pub rating: f64,
    /// Free-text comment.
    pub comment: String,
}

impl Default for ReviewRequest {
    fn default() -> Self {
        Self {
            rating: MAX_RATING,
            comment: String::new(),
        }
    }
}

impl ReviewRequest {
    /// Checks the form locally before it is sent.
    ///
    /// # Errors
    ///
    /// Returns [`ReviewError::InvalidRating`] for ratings the backend would refuse.
    pub fn validate(&self) -> Result<(), ReviewError> {
        let in_range = (MIN_RATING..=MAX_RATING).contains(&self.rating);
        let half_step = (self.rating * 2.0).fract().abs() < f64::EPSILON;
        if in_range && half_step {
            Ok(())
        } else {
            Err(ReviewError::InvalidRating)
        }
    }
}

impl From<&Review> for ReviewRequest {
    fn from(review: &Review) -> Self {
        Self {
            rating: review.rating,
            comment: review.comment.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test]
    fn present_review_parses() {
        let response: ReviewResponse =
            serde_json::from_str(r#"{"review": {"id": 3, "rating": 4.5, "comment": "Excelente"}}"#)
                .unwrap();
        let review = response.review.unwrap();
        assert!((review.rating - 4.5).abs() < f64::EPSILON);
        assert_eq!(review.comment, "Excelente");
    }

    #[test]
    fn string_ratings_parse() {
        let response: ReviewResponse =
            serde_json::from_str(r#"{"review": {"rating": "3.0", "comment": "Bueno"}}"#).unwrap();
        assert!((response.review.unwrap().rating - 3.0).abs() < f64::EPSILON);
    }

    #[test_case(r#"{"review": {}}"# ; "empty object")]
    #[test_case(r#"{"review": null}"# ; "null")]
    #[test_case("{}" ; "missing")]
    fn absent_review_reads_as_none(body: &str) {
        let response: ReviewResponse = serde_json::from_str(body).unwrap();
        assert_eq!(response.review, None);
    }

    #[test_case(1.0, true ; "lowest")]
    #[test_case(4.5, true ; "half step")]
    #[test_case(5.0, true ; "highest")]
    #[test_case(0.5, false ; "below range")]
    #[test_case(5.5, false ; "above range")]
    #[test_case(3.3, false ; "not a half step")]
    fn ratings_are_validated(rating: f64, valid: bool) {
        let request = ReviewRequest {
            rating,
            comment: String::new(),
        };
        assert_eq!(request.validate().is_ok(), valid);
    }
}
