//! Behavioural tests for the registration form.
//!
//! These scenarios drive a [`RegistrationForm`] the way a user would: typing
//! into fields, managing skill entries, and submitting. They check the
//! normalised output, the per-field messages, and the skill list identity
//! guarantees.

#![expect(
    clippy::expect_used,
    reason = "test code uses expect for clear failure messages"
)]

use registration_form::{
    EntryKey, RawSkill, RegistrationForm, SubmissionEvent, SubmissionState, TextDisplay,
    UserRegistration, ValidationErrors,
};
use rstest::fixture;
use rstest_bdd::Slot;
use rstest_bdd_macros::{ScenarioState, given, scenario, then, when};

/// Test world holding the form, its display, and submission outcomes.
#[derive(Default, ScenarioState)]
struct World {
    form: Slot<RegistrationForm>,
    display: Slot<TextDisplay>,
    last_event: Slot<SubmissionEvent>,
    previous_event: Slot<SubmissionEvent>,
    entries_before: Slot<Vec<(EntryKey, RawSkill)>>,
}

impl World {
    fn form(&self) -> RegistrationForm {
        self.form.get().expect("form should be set")
    }

    fn submit(&self) -> SubmissionEvent {
        let mut form = self.form();
        let mut display = self.display.get().unwrap_or_default();
        let event = form.submit(&mut display).expect("display succeeds");
        self.form.set(form);
        self.display.set(display);
        event
    }

    fn accepted(&self) -> UserRegistration {
        match self.last_event.get().expect("form should be submitted") {
            SubmissionEvent::Accepted(registration) => registration,
            SubmissionEvent::Rejected(errors) => panic!("expected acceptance, got {errors:?}"),
        }
    }

    fn rejected(&self) -> ValidationErrors {
        match self.last_event.get().expect("form should be submitted") {
            SubmissionEvent::Rejected(errors) => errors,
            SubmissionEvent::Accepted(registration) => {
                panic!("expected rejection, got {registration:?}")
            }
        }
    }

    fn update(&self, edit: impl FnOnce(&mut RegistrationForm)) {
        let mut form = self.form();
        edit(&mut form);
        self.form.set(form);
    }
}

#[fixture]
fn world() -> World {
    World::default()
}

fn entries(form: &RegistrationForm) -> Vec<(EntryKey, RawSkill)> {
    form.skills()
        .entries()
        .map(|(key, entry)| (key, entry.clone()))
        .collect()
}

// ============================================================================
// Given steps
// ============================================================================

#[given("an empty registration form")]
fn an_empty_registration_form(world: &World) {
    world.form.set(RegistrationForm::default());
}

#[given("a filled registration form")]
fn a_filled_registration_form(world: &World) {
    let mut form = RegistrationForm::default();
    form.set_name("john doe");
    form.set_national_id("12345678909");
    form.set_email("John@Gmail.com");
    form.set_password("secret1");
    for (title, proficiency) in [("Rust", "80"), ("Go", "40")] {
        let key = form.skills_mut().append();
        form.skills_mut().set_title(key, title);
        form.skills_mut().set_proficiency(key, proficiency);
    }
    world.form.set(form);
}

#[given("the name is cleared")]
fn the_name_is_cleared(world: &World) {
    world.update(|form| form.set_name(""));
}

#[given("the email is \"{email}\"")]
fn the_email_is(world: &World, email: String) {
    world.update(|form| form.set_email(email));
}

#[given("the last skill entry is removed")]
fn the_last_skill_entry_is_removed(world: &World) {
    world.update(|form| {
        let last = form.skills().keys().last().expect("form has skills");
        assert!(form.skills_mut().remove(last));
    });
}

#[given("every skill has proficiency \"{proficiency}\"")]
fn every_skill_has_proficiency(world: &World, proficiency: String) {
    world.update(|form| {
        let keys: Vec<EntryKey> = form.skills().keys().collect();
        for key in keys {
            assert!(form.skills_mut().set_proficiency(key, proficiency.as_str()));
        }
    });
}

// ============================================================================
// When steps
// ============================================================================

#[when("the form is submitted")]
fn the_form_is_submitted(world: &World) {
    let event = world.submit();
    world.last_event.set(event);
}

#[when("the form is submitted twice")]
fn the_form_is_submitted_twice(world: &World) {
    let first = world.submit();
    world.previous_event.set(first);
    let second = world.submit();
    world.last_event.set(second);
}

#[when("skill {index:usize} is given proficiency \"{proficiency}\"")]
fn skill_is_given_proficiency(world: &World, index: usize, proficiency: String) {
    world.update(|form| {
        let key = form.skills().keys().nth(index).expect("skill index exists");
        assert!(form.skills_mut().set_proficiency(key, proficiency));
    });
}

#[when("a skill entry is appended and then removed")]
fn a_skill_entry_is_appended_and_then_removed(world: &World) {
    world.entries_before.set(entries(&world.form()));
    world.update(|form| {
        let key = form.skills_mut().append();
        form.skills_mut().set_title(key, "Temporary");
        assert!(form.skills_mut().remove(key));
    });
}

#[when("the national ID \"{raw}\" is typed")]
fn the_national_id_is_typed(world: &World, raw: String) {
    world.update(|form| {
        form.set_national_id(&raw);
    });
}

// ============================================================================
// Then steps
// ============================================================================

#[then("the submission is accepted")]
fn the_submission_is_accepted(world: &World) {
    let registration = world.accepted();
    let display = world.display.get().expect("display should be set");

    assert!(display.errors().is_empty());
    assert!(display.output().contains(registration.email()));
}

#[then("the submission is rejected")]
fn the_submission_is_rejected(world: &World) {
    let errors = world.rejected();
    let display = world.display.get().expect("display should be set");

    assert!(!errors.is_empty());
    assert_eq!(display.errors(), &errors);
}

#[then("the registered name is \"{name}\"")]
fn the_registered_name_is(world: &World, name: String) {
    assert_eq!(world.accepted().name(), name);
}

#[then("the registered email is \"{email}\"")]
fn the_registered_email_is(world: &World, email: String) {
    assert_eq!(world.accepted().email(), email);
}

#[then("the form is idle")]
fn the_form_is_idle(world: &World) {
    assert_eq!(world.form().state(), SubmissionState::Idle);
}

#[then("the \"{path}\" field reports \"{message}\"")]
fn the_field_reports(world: &World, path: String, message: String) {
    let errors = world.rejected();
    let reported = errors
        .iter()
        .find(|(candidate, _)| candidate.to_string() == path)
        .map(|(_, kind)| kind.to_string());

    assert_eq!(reported.as_deref(), Some(message.as_str()), "errors: {errors:?}");
}

#[then("exactly {count:usize} field fails")]
fn exactly_count_field_fails(world: &World, count: usize) {
    assert_eq!(world.rejected().len(), count);
}

#[then("the skill entries are unchanged")]
fn the_skill_entries_are_unchanged(world: &World) {
    let before = world
        .entries_before
        .get()
        .expect("entries should be captured");

    assert_eq!(entries(&world.form()), before);
}

#[then("the national ID reads \"{expected}\"")]
fn the_national_id_reads(world: &World, expected: String) {
    assert_eq!(world.form().national_id(), expected);
}

#[then("both submissions report the same errors")]
fn both_submissions_report_the_same_errors(world: &World) {
    let previous = world
        .previous_event
        .get()
        .expect("first submission should be recorded");

    assert_eq!(previous, SubmissionEvent::Rejected(world.rejected()));
    assert_eq!(world.form().state(), SubmissionState::Idle);
}

// ============================================================================
// Scenario bindings
// ============================================================================

#[scenario(
    path = "tests/features/registration_form.feature",
    name = "Valid input is normalised on acceptance"
)]
fn valid_input_is_normalised_on_acceptance(world: World) {
    let _ = world;
}

#[scenario(
    path = "tests/features/registration_form.feature",
    name = "Blank name is rejected"
)]
fn blank_name_is_rejected(world: World) {
    let _ = world;
}

#[scenario(
    path = "tests/features/registration_form.feature",
    name = "Upper-case email is lower-cased"
)]
fn upper_case_email_is_lower_cased(world: World) {
    let _ = world;
}

#[scenario(
    path = "tests/features/registration_form.feature",
    name = "Email outside the allowed domain is rejected"
)]
fn email_outside_the_allowed_domain_is_rejected(world: World) {
    let _ = world;
}

#[scenario(
    path = "tests/features/registration_form.feature",
    name = "A single skill is not enough"
)]
fn a_single_skill_is_not_enough(world: World) {
    let _ = world;
}

#[scenario(
    path = "tests/features/registration_form.feature",
    name = "One skill must exceed the proficiency threshold"
)]
fn one_skill_must_exceed_the_proficiency_threshold(world: World) {
    let _ = world;
}

#[scenario(
    path = "tests/features/registration_form.feature",
    name = "Invalid skill entries are reported by position"
)]
fn invalid_skill_entries_are_reported_by_position(world: World) {
    let _ = world;
}

#[scenario(
    path = "tests/features/registration_form.feature",
    name = "Appending and removing a skill restores the list"
)]
fn appending_and_removing_a_skill_restores_the_list(world: World) {
    let _ = world;
}

#[scenario(
    path = "tests/features/registration_form.feature",
    name = "National ID is masked while typing"
)]
fn national_id_is_masked_while_typing(world: World) {
    let _ = world;
}

#[scenario(
    path = "tests/features/registration_form.feature",
    name = "Submitting twice yields the same outcome"
)]
fn submitting_twice_yields_the_same_outcome(world: World) {
    let _ = world;
}
