/// logs errors of results nobody is going to handle
pub trait LoggableError {
	fn warn_failed(self, msg: &str);
}

impl<T, E: std::error::Error> LoggableError for Result<T, E> {
	fn warn_failed(self, msg: &str) {
		if let Err(e) = self {
			tracing::warn!("{msg}: {e}");
		}
	}
}

