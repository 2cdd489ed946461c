//! Build-time settings of the frontend bundle.

/// Origin of the employee API, taken from `EMPLEADOS_API_URL` when the bundle is
/// compiled. An empty value makes every request same-origin.
pub const API_BASE_URL: &str = match option_env!("EMPLEADOS_API_URL") {
    Some(url) => url,
    None => "http://localhost:3000",
};

/// Joins an API path such as `/api/empleados` onto the configured origin.
pub fn api_url(path: &str) -> String {
    format!("{}{}", API_BASE_URL.trim_end_matches('/'), path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn joins_path_without_double_slash() {
        let url = api_url("/api/empleados");
        assert!(url.ends_with("/api/empleados"));
        assert!(!url.contains("//api"));
    }
}
