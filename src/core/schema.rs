//! Declared response schemas for the two model calls
//!
//! Both requests attach a `responseSchema` so the model's JSON output is
//! structurally constrained by the transport instead of being re-validated
//! in depth on our side.

use serde_json::{json, Value};

/// Schema for the recognition call: one required field holding the
/// detected ingredient names
pub fn ingredients_response_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "ingredients": {
                "type": "ARRAY",
                "items": { "type": "STRING" }
            }
        },
        "required": ["ingredients"]
    })
}

/// Schema for the generation call: one required field holding the recipe
/// batch, with `calories` as the only optional record field
pub fn recipes_response_schema(servings: u32) -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "recipes": {
                "type": "ARRAY",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "title": {
                            "type": "STRING",
                            "description": "Name of the classic dish"
                        },
                        "description": {
                            "type": "STRING",
                            "description": "Short description of the dish"
                        },
                        "ingredients": {
                            "type": "ARRAY",
                            "items": { "type": "STRING" },
                            "description": format!("Ingredient lines with quantities for {servings} people")
                        },
                        "instructions": {
                            "type": "ARRAY",
                            "items": { "type": "STRING" },
                            "description": "Preparation steps"
                        },
                        "prepTime": { "type": "STRING" },
                        "difficulty": {
                            "type": "STRING",
                            "enum": ["Easy", "Medium", "Hard"]
                        },
                        "calories": { "type": "STRING" },
                        "imageUrl": { "type": "STRING" },
                        "servings": {
                            "type": "INTEGER",
                            "description": "Number of people the quantities are scaled for"
                        }
                    },
                    "required": [
                        "title", "description", "ingredients", "instructions",
                        "prepTime", "difficulty", "imageUrl", "servings"
                    ]
                }
            }
        },
        "required": ["recipes"]
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ingredients_schema_requires_the_top_level_field() {
        let schema = ingredients_response_schema();

        assert_eq!(schema["required"], json!(["ingredients"]));
        assert_eq!(schema["properties"]["ingredients"]["type"], "ARRAY");
        assert_eq!(schema["properties"]["ingredients"]["items"]["type"], "STRING");
    }

    #[test]
    fn test_recipes_schema_marks_calories_optional() {
        let schema = recipes_response_schema(4);
        let required = schema["properties"]["recipes"]["items"]["required"]
            .as_array()
            .expect("required field list");

        assert!(!required.contains(&json!("calories")));
        for field in [
            "title", "description", "ingredients", "instructions",
            "prepTime", "difficulty", "imageUrl", "servings",
        ] {
            assert!(required.contains(&json!(field)), "missing required field {field}");
        }
    }

    #[test]
    fn test_recipes_schema_constrains_difficulty_to_three_values() {
        let schema = recipes_response_schema(2);
        let difficulty =
            &schema["properties"]["recipes"]["items"]["properties"]["difficulty"];

        assert_eq!(difficulty["enum"], json!(["Easy", "Medium", "Hard"]));
    }

    #[test]
    fn test_recipes_schema_interpolates_the_serving_count() {
        let schema = recipes_response_schema(7);
        let description = schema["properties"]["recipes"]["items"]["properties"]
            ["ingredients"]["description"]
            .as_str()
            .expect("ingredients description");

        assert!(description.contains("7 people"));
    }
}
