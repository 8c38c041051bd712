//! PyPI name availability checks via the JSON API.

use std::time::Duration;

use tracing::debug;

/// Package name availability status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Availability {
    Available,
    Taken,
    Error,
}

const PYPI_URL: &str = "https://pypi.org/pypi";
const TIMEOUT: Duration = Duration::from_secs(10);

/// Check whether a package name is available on PyPI.
///
/// 404 means the name is free, 200 means taken; anything else, including
/// transport failures and a blank name, reports `Error` rather than
/// guessing. Never panics and never hangs past the timeout.
pub fn check_availability(name: &str) -> Availability {
    let name = name.trim();
    if name.is_empty() {
        return Availability::Error;
    }

    let agent = ureq::config::Config::builder()
        .http_status_as_error(false)
        .timeout_global(Some(TIMEOUT))
        .build()
        .new_agent();

    let url = format!("{PYPI_URL}/{}/json", name.to_lowercase());
    match agent.get(&url).call() {
        Ok(response) => match response.status().as_u16() {
            404 => Availability::Available,
            200 => Availability::Taken,
            status => {
                debug!(status, "unexpected PyPI response");
                Availability::Error
            }
        },
        Err(err) => {
            debug!("PyPI availability check failed: {err}");
            Availability::Error
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_name_is_an_error_without_a_request() {
        assert_eq!(check_availability(""), Availability::Error);
        assert_eq!(check_availability("   "), Availability::Error);
    }
}
