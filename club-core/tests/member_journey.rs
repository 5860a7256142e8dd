//! Walks a guest through sign-up, a game reward and a redemption, the way
//! the UI drives the core frame by frame.

use club_core::games::{FlipOutcome, FortuneWheel, MemoryGame};
use club_core::{
    Catalog, ClubConfig, ClubStore, ItemId, NavOutcome, Navigator, PointsReason, Rank,
    StoreError, VerificationStage, VerificationWizard, View, WizardAction,
};

const FRAME_MS: u64 = 16;

fn run_frames(wizard: &mut VerificationWizard, store: &mut ClubStore, now: &mut u64, ms: u64) {
    let end = *now + ms;
    while *now < end {
        *now += FRAME_MS;
        wizard.tick(*now, store);
    }
}

fn wait_until_idle(wizard: &mut VerificationWizard, store: &mut ClubStore, now: &mut u64) {
    while wizard.is_busy() {
        run_frames(wizard, store, now, FRAME_MS);
    }
}

#[test]
fn guest_signs_up_plays_and_redeems() {
    let config = ClubConfig::from_yaml_str(
        "wizard:\n  send_code_delay_ms: 300\n  verify_code_delay_ms: 300\n",
    )
    .unwrap();
    let mut store = ClubStore::new(&config.rewards);
    let mut catalog = Catalog::new();
    let mut nav = Navigator::new();
    let mut wizard =
        VerificationWizard::new(config.wizard.clone(), config.rewards.signup_bonus);
    let mut now = 1_700_000_000_000u64;

    // Members-only page bounces the guest to sign-up.
    let outcome = nav.navigate(View::Profile, store.is_signed_in());
    assert_eq!(outcome, NavOutcome::NeedsSignIn(View::Profile));
    store.request_sign_in();
    wizard.dispatch(WizardAction::Open, now, &mut store).unwrap();

    wizard
        .dispatch(WizardAction::SetContact("9991234567".into()), now, &mut store)
        .unwrap();
    wizard.dispatch(WizardAction::Advance, now, &mut store).unwrap();
    wait_until_idle(&mut wizard, &mut store, &mut now);
    assert_eq!(wizard.stage(), VerificationStage::AwaitingCode);

    wizard
        .dispatch(WizardAction::SetCode("0000".into()), now, &mut store)
        .unwrap();
    wizard.dispatch(WizardAction::Advance, now, &mut store).unwrap();
    wait_until_idle(&mut wizard, &mut store, &mut now);

    wizard
        .dispatch(WizardAction::SetDisplayName("CyberNinja_42".into()), now, &mut store)
        .unwrap();
    wizard.dispatch(WizardAction::Advance, now, &mut store).unwrap();
    wait_until_idle(&mut wizard, &mut store, &mut now);
    assert_eq!(wizard.stage(), VerificationStage::Completed);
    assert!(!store.is_signed_in());

    run_frames(&mut wizard, &mut store, &mut now, config.wizard.completion_delay_ms);
    assert!(store.is_signed_in());
    assert!(!store.auth_prompt_open());
    assert_eq!(store.points(), 500);
    assert_eq!(store.rank(), Some(Rank::Rookie));
    wizard.close(&mut store);

    // Sign-up returns the guest to the page that bounced them.
    assert_eq!(nav.resume_pending(store.is_signed_in()), Some(View::Profile));
    assert_eq!(nav.current(), View::Profile);

    assert_eq!(
        nav.navigate(View::Games, store.is_signed_in()),
        NavOutcome::Shown(View::Games)
    );

    // Wheel prize.
    let mut wheel =
        FortuneWheel::with_rng(&config.rewards, fastrand::Rng::with_seed(11));
    wheel.spin(now).unwrap();
    now += config.rewards.wheel_spin_ms;
    let prize = wheel.tick(now).unwrap();
    store.award_points(prize.points, PointsReason::WheelPrize).unwrap();

    // Perfect memory round.
    let mut memory =
        MemoryGame::with_rng(3, config.rewards.memory_mismatch_ms, fastrand::Rng::with_seed(5));
    let mut won = false;
    while !memory.is_won() {
        let cards = memory.cards().to_vec();
        let first = cards.iter().position(|c| c.state == club_core::games::CardState::Hidden).unwrap();
        let second = (0..cards.len())
            .find(|&i| i != first && cards[i].ingredient == cards[first].ingredient)
            .unwrap();
        memory.flip(first, now).unwrap();
        won = memory.flip(second, now).unwrap() == FlipOutcome::Won;
    }
    assert!(won);
    let memory_points = memory.reward(config.rewards.memory_base_reward);
    assert_eq!(memory_points, config.rewards.memory_base_reward);
    store.award_points(memory_points, PointsReason::MemoryGame).unwrap();

    let balance = 500 + prize.points + memory_points;
    assert_eq!(store.points(), balance);

    // Redeem a slice, then fail to afford the T-shirt without changing anything.
    store.purchase(&mut catalog, ItemId::FreeSlice, now).unwrap();
    assert_eq!(store.points(), balance - 150);
    let err = store.purchase(&mut catalog, ItemId::ClubTShirt, now).unwrap_err();
    assert!(matches!(err, StoreError::InsufficientPoints { needed: 1_500, .. }));
    assert_eq!(store.inventory().get(&ItemId::FreeSlice), Some(&1));
    assert_eq!(store.purchases().len(), 1);
    assert_eq!(store.ledger().len(), 4);

    store.sign_out();
    nav.drop_member_views();
    assert_eq!(nav.current(), View::Home);
}

#[test]
fn closing_the_confirmation_still_signs_the_member_in() {
    let config = ClubConfig::default();
    let mut store = ClubStore::new(&config.rewards);
    let mut wizard =
        VerificationWizard::new(config.wizard.clone(), config.rewards.signup_bonus);
    let mut now = 0u64;

    store.request_sign_in();
    wizard.dispatch(WizardAction::Open, now, &mut store).unwrap();
    let steps = [
        WizardAction::SetContact("9991234567".into()),
        WizardAction::SetCode("1234".into()),
        WizardAction::GenerateDisplayName,
    ];
    for step in steps {
        wizard.dispatch(step, now, &mut store).unwrap();
        wizard.dispatch(WizardAction::Advance, now, &mut store).unwrap();
        wait_until_idle(&mut wizard, &mut store, &mut now);
    }
    assert_eq!(wizard.stage(), VerificationStage::Completed);

    wizard.dispatch(WizardAction::Close, now, &mut store).unwrap();
    assert!(store.is_signed_in());
    assert!(!store.auth_prompt_open());

    run_frames(&mut wizard, &mut store, &mut now, config.wizard.completion_delay_ms);
    assert_eq!(store.points(), config.rewards.signup_bonus);
    assert_eq!(store.ledger().len(), 1);
}
