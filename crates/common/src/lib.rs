pub mod types;
pub mod utils;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn health_type_ok() {
        let h = types::Health { status: "ok" };
        assert_eq!(h.status, "ok");
    }

    #[test]
    fn success_body_shape() {
        let body = serde_json::to_value(types::Success::ok()).unwrap();
        assert_eq!(body, serde_json::json!({"success": true}));
    }
}
