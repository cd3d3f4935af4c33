use std::fs::File;
use std::time::Duration;

use simplelog::{Config, LevelFilter, WriteLogger};
use tuiform::{
    Easing, Event, FocusState, Form, FormControl, KeyframePlayer, Keyframes, MouseButton,
    RadioGroup, RadioItem, RadioState,
};

/// Drives a radio group and its form through a scripted interaction: the
/// host renderer is out of scope, so input events are simulated directly.
fn main() -> std::io::Result<()> {
    // Set up file logging
    let log_file = File::create("radio_form.log")?;
    WriteLogger::init(LevelFilter::Debug, Config::default(), log_file)
        .expect("Failed to initialize logger");

    let group = RadioGroup::new("flavor")
        .id("flavor-group")
        .item(RadioItem::new("vanilla").label("Vanilla"))
        .item(RadioItem::new("chocolate").label("Chocolate"))
        .item(RadioItem::new("stracciatella").label("Stracciatella"))
        .value("vanilla");

    let mut state = RadioState::new();
    state.insert(group);

    let mut form = Form::new().id("order");
    for control in state.controls() {
        form.register(control);
    }

    // The initial declarative value surfaces as the first change
    for event in state.process_events(&[]) {
        report(&event);
    }

    // Focus the group, then click the second option
    let mut focus = FocusState::new();
    state.focus("flavor-group", &mut focus);
    println!("focused: {:?}", focus.focused());

    let target = state.get("flavor-group").unwrap().items[1].id.clone();
    let clicks = vec![Event::Click {
        target: Some(target.clone()),
        x: 0,
        y: 0,
        button: MouseButton::Left,
    }];
    for event in state.process_events(&clicks) {
        report(&event);
    }

    // Submit with Enter while the item holds focus
    let keys = vec![Event::Key {
        target: Some(target),
        key: tuiform::Key::Enter,
        modifiers: tuiform::Modifiers::new(),
    }];
    let controls: Vec<&dyn FormControl> = state.controls().collect();
    for event in form.process_events(&keys, &controls) {
        report(&event);
    }

    let data = form.collect(state.controls());
    for (name, value) in data.entries() {
        println!("submitted: {name}={value}");
    }

    // Reset back to the declared start value
    report(&form.reset(state.controls_mut()));
    println!(
        "after reset: {}",
        state.get("flavor-group").unwrap().current_value()
    );

    // Decorative shake, sampled over a pretend second of wall time
    let shake = KeyframePlayer::new(Keyframes::horizontal_shake(), Duration::from_secs(1))
        .easing(Easing::Linear);
    for ms in (0..=1000u64).step_by(100) {
        let offset = shake.value_at(Duration::from_millis(ms));
        println!("shake at {ms:4}ms: {offset:+.1} cells");
    }

    Ok(())
}

fn report(event: &Event) {
    match event {
        Event::Change { target, value } => println!("change on {target}: {value:?}"),
        Event::Submit { target } => println!("submit: {target}"),
        Event::Reset { target } => println!("reset: {target}"),
        other => println!("event: {other:?}"),
    }
}
