//! Signup form validation demo
//!
//! Run with `RUST_LOG=field_rules=trace` to see per-field evaluation.

use field_rules::{
    BoxError, EmailValidator, FieldCheck, LengthValidator, OneOfValidator, Rule, RuleEngine,
    RuleMap, ValidationResult,
};
use serde::Serialize;
use serde_json::Value;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, Serialize)]
struct Signup {
    username: String,
    email: String,
    age: u32,
    plan: String,
    password: String,
    password_confirmation: String,
}

fn passwords_match(_rule: &Rule<Signup>, value: &Value, target: &Signup) -> Result<(), BoxError> {
    if value.as_str() == Some(target.password.as_str()) {
        Ok(())
    } else {
        Err("passwords do not match".into())
    }
}

fn signup_rules() -> RuleMap<Signup> {
    RuleMap::new()
        .field("username", Rule::required())
        .field("username", LengthValidator::new().range(3, 20).into_rule())
        .field("email", Rule::required().message("we need an email to reach you"))
        .field("email", EmailValidator::new().into_rule())
        .field("age", Rule::required())
        .field("plan", OneOfValidator::new(["free", "pro"]).into_rule())
        .field("password", Rule::required())
        .field("password", LengthValidator::new().min(8).into_rule())
        .field("password_confirmation", Rule::custom(passwords_match))
}

fn report(label: &str, result: ValidationResult<()>) {
    match result {
        Ok(()) => println!("  ✅ {}: valid", label),
        Err(error) => println!("  ❌ {}: [{}] {} -> {}", label, error.code(), error.field, error),
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("🦀 field-rules Demo");
    println!("===================\n");

    let engine = RuleEngine::new(signup_rules());

    let valid = Signup {
        username: "ada".to_string(),
        email: "ada@example.com".to_string(),
        age: 36,
        plan: "pro".to_string(),
        password: "analytical".to_string(),
        password_confirmation: "analytical".to_string(),
    };
    report("complete signup", engine.evaluate_first(&valid));

    let missing_email = Signup {
        email: String::new(),
        ..valid.clone()
    };
    report("missing email", engine.evaluate_first(&missing_email));

    let bad_plan = Signup {
        plan: "enterprise".to_string(),
        ..valid.clone()
    };
    report("unknown plan", engine.evaluate_first(&bad_plan));

    let mismatch = Signup {
        password_confirmation: "engine".to_string(),
        ..valid.clone()
    };
    report("password mismatch", engine.evaluate_first(&mismatch));

    // Several problems at once: only the first field in rule order is reported
    let everything_wrong = Signup {
        username: String::new(),
        email: "nope".to_string(),
        age: 0,
        plan: "gold".to_string(),
        password: "short".to_string(),
        password_confirmation: String::new(),
    };
    report("everything wrong", engine.evaluate_first(&everything_wrong));

    println!("\n✅ Demo completed!");
}
