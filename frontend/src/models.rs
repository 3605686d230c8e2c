use serde::{Deserialize, Serialize};

/// Catalog entry as the backend returns it. The list held by the client is
/// ephemeral; identity (`_id`) is owned by the backend.
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct Product {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub price: f64,
    pub description: String,
    /// Server-side path of the uploaded image.
    pub file: String,
}

#[derive(Serialize, Debug)]
pub struct LoginBody {
    pub email: String,
    pub password: String,
}

#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct RegisterBody {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    pub mobile: String,
    pub gender: String,
}

/// Payload of a successful login.
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct TokenData {
    pub token: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn product_maps_backend_id_field() {
        let p: Product = serde_json::from_str(
            r#"{"_id":"65a1","name":"Mug","price":9.99,"description":"Ceramic mug","file":"uploads/mug.png"}"#,
        )
        .unwrap();
        assert_eq!(p.id, "65a1");
        assert_eq!(p.price, 9.99);
    }

    #[test]
    fn register_body_is_camel_case_on_the_wire() {
        let body = RegisterBody {
            first_name: "Ada".into(),
            last_name: "Lovelace".into(),
            email: "ada@example.com".into(),
            password: "secret1".into(),
            mobile: "0123456789".into(),
            gender: "Female".into(),
        };
        let json = serde_json::to_value(&body).unwrap();
        assert!(json.get("firstName").is_some());
        assert!(json.get("lastName").is_some());
        assert!(json.get("first_name").is_none());
    }
}
