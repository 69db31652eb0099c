use serde::{Deserialize, Serialize};

/// Response type for the JSON greeting endpoint
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct GreetingResponse {
    pub code: u16,
    pub result: String,
}

impl GreetingResponse {
    /// The one payload the JSON variant ever returns.
    pub fn hello_world() -> Self {
        GreetingResponse {
            code: 200,
            result: "Hello World!".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hello_world_fields() {
        let greeting = GreetingResponse::hello_world();
        assert_eq!(greeting.code, 200);
        assert_eq!(greeting.result, "Hello World!");
    }

    #[test]
    fn test_hello_world_json_shape() {
        let json = serde_json::to_value(GreetingResponse::hello_world()).unwrap();
        assert_eq!(json["code"], 200);
        assert_eq!(json["result"], "Hello World!");
        assert_eq!(json.as_object().unwrap().len(), 2);
    }
}
