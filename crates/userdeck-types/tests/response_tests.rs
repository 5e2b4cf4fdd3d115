use rstest::rstest;
use userdeck_types::{ApiResponse, Postcode};

fn response_with_postcode(postcode: &str) -> String {
    format!(
        r#"{{
            "results": [{{
                "name": {{ "first": "Bob", "last": "Jones" }},
                "location": {{
                    "street": {{ "number": 12, "name": "High Street" }},
                    "city": "Leeds",
                    "state": "West Yorkshire",
                    "postcode": {postcode}
                }},
                "email": "bob.jones@example.com",
                "dob": {{ "date": "1990-11-02T08:00:00.000Z" }},
                "phone": "017684 12345",
                "picture": {{ "large": "https://randomuser.me/api/portraits/men/2.jpg" }}
            }}],
            "info": {{ "seed": "abc", "results": 1, "page": 1, "version": "1.4" }}
        }}"#
    )
}

#[rstest]
#[case::numeric("90210", Postcode::Number(90210))]
#[case::text("\"LS1 4AP\"", Postcode::Text("LS1 4AP".to_string()))]
fn test_response_decodes_postcode_shapes(#[case] raw: &str, #[case] expected: Postcode) {
    let response: ApiResponse = serde_json::from_str(&response_with_postcode(raw)).unwrap();

    assert_eq!(response.results.len(), 1);
    assert_eq!(response.results[0].location.postcode, expected);
    assert_eq!(response.info.unwrap().seed.as_deref(), Some("abc"));
}

#[test]
fn test_response_without_info_block() {
    let response: ApiResponse = serde_json::from_str(r#"{ "results": [] }"#).unwrap();

    assert!(response.results.is_empty());
    assert!(response.info.is_none());
}

#[test]
fn test_response_without_results_is_rejected() {
    assert!(serde_json::from_str::<ApiResponse>(r#"{ "error": "Uh oh" }"#).is_err());
}
