use rpassmate::checker::{
    BLACKLIST, StrengthOutcome, StrengthRating, StrengthReport, check_password_strength,
};

fn scored(password: &str) -> StrengthReport {
    match check_password_strength(password) {
        StrengthOutcome::Scored(report) => report,
        StrengthOutcome::Blacklisted => panic!("'{}' was unexpectedly blacklisted", password),
    }
}

#[test]
fn test_blacklisted_passwords_have_no_score() {
    for pwd in BLACKLIST {
        assert_eq!(check_password_strength(pwd), StrengthOutcome::Blacklisted);
    }
}

#[test]
fn test_blacklist_is_case_insensitive() {
    assert_eq!(
        check_password_strength("PaSsWoRd"),
        StrengthOutcome::Blacklisted
    );
    assert_eq!(check_password_strength("ADMIN"), StrengthOutcome::Blacklisted);
    assert_eq!(
        check_password_strength("Password123"),
        StrengthOutcome::Blacklisted
    );
}

#[test]
fn test_strong_password_scores_five() {
    let report = scored("Str0ng!Pass");
    assert_eq!(report.score, 5);
    assert_eq!(report.rating, StrengthRating::Strong);
    assert!(report.feedback.is_empty());
}

#[test]
fn test_weak_password_scores_one() {
    let report = scored("weak");
    assert_eq!(report.score, 1);
    assert_eq!(report.rating, StrengthRating::Weak);
    assert_eq!(report.feedback.len(), 4);
}

#[test]
fn test_missing_lowercase_feedback() {
    let report = scored("NOLOWER123!");
    assert_eq!(report.score, 4);
    assert_eq!(report.rating, StrengthRating::Medium);
    assert_eq!(report.feedback, vec!["Add a lowercase letter."]);
}

#[test]
fn test_empty_password_fails_every_rule() {
    let report = scored("");
    assert_eq!(report.score, 0);
    assert_eq!(report.rating, StrengthRating::Weak);
    assert_eq!(report.feedback.len(), 5);
}

#[test]
fn test_rating_boundaries() {
    // length + lowercase + digit
    assert_eq!(scored("abcdefgh1").rating, StrengthRating::Medium);
    // length + lowercase
    assert_eq!(scored("abcdefgh").rating, StrengthRating::Weak);
}

#[test]
fn test_feedback_follows_rule_order() {
    let report = scored("zz");
    assert_eq!(
        report.feedback,
        vec![
            "Password is too short (needs 8+ characters).",
            "Add an uppercase letter.",
            "Add a number.",
            "Add a special character (e.g. !, @, #).",
        ]
    );
}

#[test]
fn test_checker_is_pure() {
    let first = check_password_strength("MyPass123!");
    let second = check_password_strength("MyPass123!");
    assert_eq!(first, second);
}
