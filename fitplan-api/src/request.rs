use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use fitplan_model::{
    calculator::PlanError,
    profile::{Categorical, Profile},
};
use serde::Serialize;
use serde_json::{Map, Value};

#[derive(Debug, thiserror::Error)]
pub enum RequestError {
    #[error("missing field `{0}`")]
    MissingField(&'static str),
    #[error("field `{field}` must be {expected}")]
    TypeMismatch {
        field: &'static str,
        expected: &'static str,
    },
    #[error("invalid request body: {0}")]
    InvalidBody(String),
    #[error(transparent)]
    OutOfRange(#[from] PlanError),
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

impl ResponseError for RequestError {
    fn status_code(&self) -> StatusCode {
        StatusCode::BAD_REQUEST
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorBody {
            error: self.to_string(),
        })
    }
}

type Result<T> = std::result::Result<T, RequestError>;

/// Parses a `/predict` request body into a profile. Fields are checked in
/// declaration order and the first problem is reported.
pub fn parse_profile(body: &[u8]) -> Result<Profile> {
    let value: Value =
        serde_json::from_slice(body).map_err(|e| RequestError::InvalidBody(e.to_string()))?;
    let Value::Object(fields) = value else {
        return Err(RequestError::InvalidBody(
            "expected a JSON object".to_owned(),
        ));
    };

    Ok(Profile::new(
        number(&fields, "age")?,
        category(&fields, "gender")?,
        number(&fields, "height")?,
        number(&fields, "weight")?,
        category(&fields, "fitness_goal")?,
        category(&fields, "activity_level")?,
    ))
}

fn field<'a>(fields: &'a Map<String, Value>, name: &'static str) -> Result<&'a Value> {
    fields.get(name).ok_or(RequestError::MissingField(name))
}

fn number(fields: &Map<String, Value>, name: &'static str) -> Result<f64> {
    field(fields, name)?
        .as_f64()
        .ok_or(RequestError::TypeMismatch {
            field: name,
            expected: "a number",
        })
}

/// Categorical fields never fail once present: non-string values are treated
/// as unrecognized and take the default branch.
fn category<T: Categorical>(fields: &Map<String, Value>, name: &'static str) -> Result<T> {
    Ok(match field(fields, name)? {
        Value::String(s) => T::from_value(s),
        other => T::from_value(&other.to_string()),
    })
}

#[cfg(test)]
mod tests {
    use fitplan_model::profile::{ActivityLevel, FitnessGoal, Gender};
    use serde_json::json;

    use super::*;

    fn body(value: Value) -> Vec<u8> {
        serde_json::to_vec(&value).unwrap()
    }

    fn valid() -> Value {
        json!({
            "age": 30,
            "gender": "male",
            "height": 180,
            "weight": 80.5,
            "fitness_goal": "weight_loss",
            "activity_level": "moderately_active",
        })
    }

    #[test]
    fn parses_valid_body() {
        let profile = parse_profile(&body(valid())).unwrap();

        assert_eq!(
            profile,
            Profile::new(
                30.0,
                Gender::Male,
                180.0,
                80.5,
                FitnessGoal::WeightLoss,
                ActivityLevel::ModeratelyActive,
            )
        );
    }

    #[test]
    fn reports_each_missing_field() {
        let fields = [
            "age",
            "gender",
            "height",
            "weight",
            "fitness_goal",
            "activity_level",
        ];

        for (i, name) in fields.into_iter().enumerate() {
            let mut value = valid();
            value.as_object_mut().unwrap().remove(name);

            match parse_profile(&body(value)) {
                Err(RequestError::MissingField(field)) => assert_eq!(field, name, "Test case #{}", i),
                other => panic!("Test case #{}: unexpected {:?}", i, other),
            }
        }
    }

    #[test]
    fn first_missing_field_wins() {
        let result = parse_profile(&body(json!({ "gender": "male" })));
        assert!(matches!(result, Err(RequestError::MissingField("age"))));
    }

    #[test]
    fn rejects_non_numeric_measurements() {
        let test_data = [json!("80"), json!(true), json!(null), json!([80]), json!({})];

        for (i, weight) in test_data.into_iter().enumerate() {
            let mut value = valid();
            value["weight"] = weight;

            let err = parse_profile(&body(value)).unwrap_err();
            assert_eq!(
                err.to_string(),
                "field `weight` must be a number",
                "Test case #{}",
                i
            );
        }
    }

    #[test]
    fn non_string_categories_use_defaults() {
        let mut value = valid();
        value["gender"] = json!(null);
        value["fitness_goal"] = json!(1);
        value["activity_level"] = json!(["very_active"]);

        let profile = parse_profile(&body(value)).unwrap();

        assert_eq!(profile.gender, Gender::Other("null".to_owned()));
        assert_eq!(profile.fitness_goal, FitnessGoal::Other("1".to_owned()));
        assert!(matches!(profile.activity_level, ActivityLevel::Other(_)));
    }

    #[test]
    fn rejects_malformed_bodies() {
        let test_data: [&[u8]; 4] = [b"", b"{", b"[1, 2]", b"\"age\""];

        for (i, input) in test_data.into_iter().enumerate() {
            assert!(
                matches!(parse_profile(input), Err(RequestError::InvalidBody(_))),
                "Test case #{}",
                i
            );
        }
    }
}
