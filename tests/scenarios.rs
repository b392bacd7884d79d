use design_principles::config::DemoConfig;
use design_principles::decorator::{Base, Coffee, CoffeeOrder, Milk, SimpleCoffee, Sugar, Topping};
use design_principles::dip::{Application, LoggerProfile};
use design_principles::observer::{LedDisplay, MobileDisplay, WeatherStation};
use design_principles::DesignError;

fn lines(out: Vec<u8>) -> Vec<String> {
    String::from_utf8(out)
        .expect("demo output is UTF-8")
        .lines()
        .map(String::from)
        .collect()
}

#[test]
fn coffee_prices_accumulate() {
    assert_eq!(Milk::new(SimpleCoffee).cost(), 20);
    assert_eq!(Sugar::new(Milk::new(SimpleCoffee)).cost(), 25);

    let fancy = CoffeeOrder::builder()
        .base(Base::Simple)
        .toppings([Topping::Milk, Topping::Sugar, Topping::Vanilla, Topping::WhippedCream])
        .build()
        .expect("base is set");
    assert_eq!(fancy.cost(), 44);
}

#[test]
fn toppings_refuse_an_absent_beverage() {
    let err = Topping::Milk.try_wrap(None).err().expect("missing beverage");
    assert!(matches!(err, DesignError::InvalidArgument { .. }));
}

#[test]
fn weather_station_scenario() {
    let mut station = WeatherStation::new(25.0);
    station.add_observer(MobileDisplay);
    let led = station.add_observer(LedDisplay);

    let mut out = Vec::new();
    assert_eq!(station.notify_observers(&mut out).unwrap(), 2);
    assert_eq!(
        lines(out),
        vec!["Mobile Display Temperature : 25.0", "LED Display Temperature : 25.0"]
    );

    station.remove_observer(led).expect("LED was registered");
    station.set_temperature(22.0);

    let mut out = Vec::new();
    assert_eq!(station.notify_observers(&mut out).unwrap(), 1);
    assert_eq!(lines(out), vec!["Mobile Display Temperature : 22.0"]);
}

#[test]
fn every_profile_logs_one_line_per_sink() {
    for profile in [
        LoggerProfile::Production,
        LoggerProfile::Development,
        LoggerProfile::Alert,
        LoggerProfile::Test,
    ] {
        let app = Application::from_profile(profile);
        let mut out = Vec::new();
        let invoked = app.process_user(&mut out, "user").unwrap();

        let written = lines(out);
        assert_eq!(written.len(), invoked);
        for (line, sink) in written.iter().zip(app.sinks()) {
            assert_eq!(line, &format!("Writing to {sink} : User processed: user"));
        }
    }
}

#[test]
fn described_test_setup_logs_to_console_only() {
    let app = DemoConfig::from_toml(r#"profile = "test""#)
        .expect("valid profile")
        .application();
    assert_eq!(app.sinks(), vec!["Console"]);

    let mut out = Vec::new();
    assert_eq!(app.process_user(&mut out, "test_user").unwrap(), 1);
    assert_eq!(lines(out), vec!["Writing to Console : User processed: test_user"]);
}
