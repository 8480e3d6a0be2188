#[cfg(test)]
mod tests {
    use validator::Validate;

    use crate::types::CarCreateRequest;

    fn valid_request() -> CarCreateRequest {
        CarCreateRequest {
            color: Some("#ffb7d5".to_string()),
            price_in_cents: Some(1_000_000),
            max_speed_mph: Some(140),
            max_speed_kmp: Some(224),
            vendor_name: Some("Mazda".to_string()),
            model_name: Some("Mx-5".to_string()),
        }
    }

    fn assert_rule(req: &CarCreateRequest, field: &str, rule: &str) {
        let errors = req.validate().unwrap_err();
        let field_errors = errors.field_errors();
        let codes: Vec<String> = field_errors
            .get(field)
            .unwrap_or_else(|| panic!("expected a violation on field '{}'", field))
            .iter()
            .map(|e| e.code.to_string())
            .collect();
        assert!(codes.contains(&rule.to_string()), "expected rule '{}' on '{}', got {:?}", rule, field, codes);
    }

    #[test]
    fn valid_payload_passes() {
        assert!(valid_request().validate().is_ok());
    }

    #[test]
    fn missing_required_fields_are_reported() {
        let mut req = valid_request();
        req.color = None;
        assert_rule(&req, "color", "required");

        let mut req = valid_request();
        req.price_in_cents = None;
        assert_rule(&req, "price_in_cents", "required");

        let mut req = valid_request();
        req.max_speed_kmp = None;
        assert_rule(&req, "max_speed_kmp", "required");

        let mut req = valid_request();
        req.vendor_name = None;
        assert_rule(&req, "vendor_name", "required");

        let mut req = valid_request();
        req.model_name = None;
        assert_rule(&req, "model_name", "required");
    }

    #[test]
    fn max_speed_mph_is_optional() {
        let mut req = valid_request();
        req.max_speed_mph = None;
        assert!(req.validate().is_ok());
    }

    #[test]
    fn negative_numbers_are_rejected() {
        let mut req = valid_request();
        req.price_in_cents = Some(-1);
        assert_rule(&req, "price_in_cents", "range");

        let mut req = valid_request();
        req.max_speed_mph = Some(-1);
        assert_rule(&req, "max_speed_mph", "range");

        let mut req = valid_request();
        req.max_speed_kmp = Some(-50);
        assert_rule(&req, "max_speed_kmp", "range");
    }

    #[test]
    fn zero_values_are_acceptable() {
        let mut req = valid_request();
        req.price_in_cents = Some(0);
        req.max_speed_mph = Some(0);
        req.max_speed_kmp = Some(0);
        assert!(req.validate().is_ok());
    }

    #[test]
    fn name_length_bounds_are_enforced() {
        let mut req = valid_request();
        req.vendor_name = Some("M".to_string());
        assert_rule(&req, "vendor_name", "length");

        let mut req = valid_request();
        req.model_name = Some("X".to_string());
        assert_rule(&req, "model_name", "length");

        let mut req = valid_request();
        req.vendor_name = Some("a".repeat(256));
        assert_rule(&req, "vendor_name", "length");

        // Two characters is the inclusive lower bound
        let mut req = valid_request();
        req.vendor_name = Some("VW".to_string());
        assert!(req.validate().is_ok());
    }

    #[test]
    fn recognized_color_forms_pass() {
        let colors = [
            "#ffb7d5",
            "#abc",
            "#00FF00",
            "rgb(255, 0, 0)",
            "rgb(0,0,0)",
            "rgba(12, 34, 56, 0.5)",
            "hsl(120, 50%, 50%)",
            "hsla(360, 100%, 100%, 1)",
            "red",
            "Silver",
        ];
        for color in colors {
            let mut req = valid_request();
            req.color = Some(color.to_string());
            assert!(req.validate().is_ok(), "expected '{}' to be a valid color", color);
        }
    }

    #[test]
    fn unrecognized_colors_are_rejected() {
        let colors = ["not-a-color", "ffb7d5", "#ffb7d", "#ffb7d5aa", "rgb(256, 0, 0)", "rgb(1,2)"];
        for color in colors {
            let mut req = valid_request();
            req.color = Some(color.to_string());
            assert_rule(&req, "color", "iscolor");
        }
    }

    #[test]
    fn all_violations_are_reported_at_once() {
        let req = CarCreateRequest {
            color: None,
            price_in_cents: None,
            max_speed_mph: None,
            max_speed_kmp: None,
            vendor_name: None,
            model_name: None,
        };
        let errors = req.validate().unwrap_err();
        let field_errors = errors.field_errors();
        for field in ["color", "price_in_cents", "max_speed_kmp", "vendor_name", "model_name"] {
            assert!(field_errors.contains_key(field), "missing violation for '{}'", field);
        }
        // The optional field must not be flagged when absent
        assert!(!field_errors.contains_key("max_speed_mph"));
    }
}
