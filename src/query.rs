//! Turns raw request parameters into validated query inputs.
//!
//! Every function here runs before storage is touched, so a request that
//! fails validation never reaches the database.

use crate::{
    errors::Error,
    models::rating::{MAX_RATING, MIN_RATING},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageQuery {
    pub page: u64,
    pub limit: u64,
}

impl PageQuery {
    pub fn offset(&self) -> u64 {
        (self.page - 1) * self.limit
    }
}

fn parse_positive(value: Option<&str>, default: u64) -> Option<u64> {
    match value {
        None => Some(default),
        Some(value) => value.trim().parse::<u64>().ok().filter(|&n| n > 0),
    }
}

pub fn parse_page_query(
    page: Option<&str>,
    limit: Option<&str>,
    default_limit: u64,
    max_limit: u64,
) -> Result<PageQuery, Error> {
    let page = parse_positive(page, 1)
        .ok_or_else(|| Error::bad_request("'page' parameter must be a positive integer"))?;
    let limit = parse_positive(limit, default_limit)
        .ok_or_else(|| Error::bad_request("'limit' parameter must be a positive integer"))?;

    if limit > max_limit {
        return Err(Error::bad_request("'limit' parameter exceeds the maximum page size"));
    }

    if (page - 1).checked_mul(limit).is_none() {
        return Err(Error::bad_request("'page' parameter is out of range"));
    }

    Ok(PageQuery { page, limit })
}

pub fn parse_search(message: Option<&str>) -> Result<&str, Error> {
    match message {
        Some(message) if !message.trim().is_empty() => Ok(message),
        _ => Err(Error::bad_request("'message' parameter is required")),
    }
}

pub fn parse_level(level: Option<&str>) -> Result<Option<i32>, Error> {
    level
        .map(|level| level.trim().parse::<i32>())
        .transpose()
        .map_err(|_| Error::bad_request("'level' parameter must be an integer"))
}

/// Song ids are stored as lowercase hyphenated UUIDs.
pub fn parse_song_id(song_id: &str) -> Result<String, Error> {
    uuid::Uuid::parse_str(song_id)
        .map(|id| id.to_string())
        .map_err(|_| Error::bad_request("Invalid song id"))
}

pub fn parse_rating(rating: i32) -> Result<i32, Error> {
    if (MIN_RATING..=MAX_RATING).contains(&rating) {
        Ok(rating)
    } else {
        Err(Error::bad_request("'rating' parameter must be between 1-5"))
    }
}
