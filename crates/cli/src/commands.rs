use std::io::Write;

use serde::Serialize;

use lockwatch_assets::{Car, House};
use lockwatch_catalog::{
    CarListing, CarRegistry, RegisteredCar, describe, expensive_cars, first_names,
    sample_listings, sample_roster, total_price,
};
use lockwatch_core::{Entity, LockState, Lockable};
use lockwatch_security::{SecurityService, SecurityStatus};

use crate::cli::{Cli, Commands, states};
use crate::output::{Render, emit};

/// Door states of the demo car.
pub const DEMO_CAR_DOORS: [bool; 4] = [true, true, true, false];
/// Door states of the demo house.
pub const DEMO_HOUSE_DOORS: [bool; 2] = [true, true];
/// Window states of the demo house.
pub const DEMO_HOUSE_WINDOWS: [bool; 2] = [true, false];

/// Run the parsed command, writing its result to `out`.
pub fn run<W: Write + ?Sized>(cli: &Cli, out: &mut W) -> anyhow::Result<()> {
    let command = cli.resolved_command();
    tracing::info!(?command, json = cli.json, "running command");

    let service = SecurityService::new();
    match command {
        Commands::Demo => emit(out, cli.json, &demo(&service)),
        Commands::Car { doors } => emit(out, cli.json, &check_car(&service, states(doors))),
        Commands::House { doors, windows } => emit(
            out,
            cli.json,
            &check_house(&service, states(doors), states(windows)),
        ),
        Commands::Listings { min_price } => emit(out, cli.json, &listings(min_price)?),
        Commands::Registry { colors } => emit(out, cli.json, &registry(colors)?),
        Commands::Roster => emit(out, cli.json, &roster()),
    }
}

/// Status of one checked subject, rendered as `"<label>: <status>"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckReport {
    pub subject: &'static str,
    pub status: SecurityStatus,
    /// Lock state of every part, doors before windows.
    pub states: Vec<LockState>,
}

impl Render for CheckReport {
    fn lines(&self) -> Vec<String> {
        vec![format!("{}: {}", self.subject, self.status)]
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DemoReport {
    pub car: CheckReport,
    pub house: CheckReport,
}

impl Render for DemoReport {
    fn lines(&self) -> Vec<String> {
        let mut lines = self.car.lines();
        lines.extend(self.house.lines());
        lines
    }
}

pub fn demo(service: &SecurityService) -> DemoReport {
    let car = Car::from_states(DEMO_CAR_DOORS);
    let house = House::from_states(DEMO_HOUSE_DOORS, DEMO_HOUSE_WINDOWS);
    DemoReport {
        car: car_report(service, &car),
        house: house_report(service, &house),
    }
}

pub fn check_car(service: &SecurityService, doors: Vec<LockState>) -> CheckReport {
    car_report(service, &Car::from_states(doors))
}

pub fn check_house(
    service: &SecurityService,
    doors: Vec<LockState>,
    windows: Vec<LockState>,
) -> CheckReport {
    house_report(service, &House::from_states(doors, windows))
}

fn car_report(service: &SecurityService, car: &Car) -> CheckReport {
    let status = service.status_of(car);
    tracing::debug!(car = %car.id(), doors = car.doors().len(), %status, "car checked");
    CheckReport {
        subject: "Car",
        status,
        states: car.doors().iter().map(|d| d.lock_state()).collect(),
    }
}

fn house_report(service: &SecurityService, house: &House) -> CheckReport {
    let status = service.status_of(house);
    tracing::debug!(
        house = %house.id(),
        doors = house.doors().len(),
        windows = house.windows().len(),
        %status,
        "house checked"
    );
    let doors = house.doors().iter().map(|d| d.lock_state());
    let windows = house.windows().iter().map(|w| w.lock_state());
    CheckReport {
        subject: "House",
        status,
        states: doors.chain(windows).collect(),
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListingsReport {
    pub listings: Vec<CarListing>,
    pub total_price: u64,
    pub min_price: u64,
    pub expensive: Vec<CarListing>,
}

impl Render for ListingsReport {
    fn lines(&self) -> Vec<String> {
        let mut lines: Vec<String> = self.listings.iter().map(describe).collect();
        lines.push(format!("Total: {}", self.total_price));
        lines.push(format!("Above {}:", self.min_price));
        lines.extend(self.expensive.iter().map(describe));
        lines
    }
}

pub fn listings(min_price: u64) -> anyhow::Result<ListingsReport> {
    let listings = sample_listings();
    let total_price = total_price(&listings)?;
    let expensive = expensive_cars(&listings, min_price)
        .into_iter()
        .cloned()
        .collect();
    Ok(ListingsReport {
        listings,
        total_price,
        min_price,
        expensive,
    })
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegistryReport {
    pub cars: Vec<RegisteredCar>,
    pub count: usize,
}

impl Render for RegistryReport {
    fn lines(&self) -> Vec<String> {
        let mut lines: Vec<String> = self
            .cars
            .iter()
            .map(|car| format!("{} {}", car.color(), car.id()))
            .collect();
        lines.push(format!("Cars registered: {}", self.count));
        lines
    }
}

pub fn registry(colors: Vec<String>) -> anyhow::Result<RegistryReport> {
    let mut registry = CarRegistry::new();
    for color in colors {
        let car = registry.register(color)?;
        tracing::debug!(car = %car.id(), color = car.color(), "car registered");
    }
    Ok(RegistryReport {
        count: registry.count(),
        cars: registry.cars().to_vec(),
    })
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RosterReport {
    pub first_names: Vec<String>,
}

impl Render for RosterReport {
    fn lines(&self) -> Vec<String> {
        self.first_names.clone()
    }
}

pub fn roster() -> RosterReport {
    let students = sample_roster();
    RosterReport {
        first_names: first_names(&students).into_iter().map(str::to_string).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn run_to_string(args: &[&str]) -> String {
        let cli = Cli::try_parse_from(args).unwrap();
        let mut buf = Vec::new();
        run(&cli, &mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn demo_prints_both_results() {
        assert_eq!(
            run_to_string(&["lockwatch"]),
            "Car: Not secured\nHouse: Not secured\n"
        );
        assert_eq!(run_to_string(&["lockwatch", "demo"]), run_to_string(&["lockwatch"]));
    }

    #[test]
    fn car_with_all_doors_locked_is_secured() {
        assert_eq!(
            run_to_string(&["lockwatch", "car", "--doors", "locked,locked"]),
            "Car: Secured\n"
        );
    }

    #[test]
    fn house_with_open_window_is_not_secured() {
        assert_eq!(
            run_to_string(&["lockwatch", "house", "--doors", "true,true", "--windows", "true,false"]),
            "House: Not secured\n"
        );
    }

    #[test]
    fn blank_and_trailing_segments_are_ignored() {
        assert_eq!(
            run_to_string(&["lockwatch", "car", "--doors", "locked,"]),
            "Car: Secured\n"
        );
        assert_eq!(run_to_string(&["lockwatch", "car", "--doors="]), "Car: Secured\n");
        assert_eq!(
            run_to_string(&["lockwatch", "house", "--doors", "", "--windows", "unlocked,"]),
            "House: Not secured\n"
        );
    }

    #[test]
    fn empty_house_is_secured() {
        assert_eq!(run_to_string(&["lockwatch", "house"]), "House: Secured\n");
    }

    #[test]
    fn demo_json_has_statuses_and_states() {
        let out = run_to_string(&["lockwatch", "--json"]);
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["ok"], true);
        assert_eq!(value["data"]["car"]["status"], "not_secured");
        assert_eq!(value["data"]["car"]["states"][3], "unlocked");
        assert_eq!(value["data"]["house"]["states"].as_array().unwrap().len(), 4);
    }

    #[test]
    fn listings_report_total_and_filter() {
        let report = listings(40_000).unwrap();
        assert_eq!(report.total_price, 80_000);
        assert_eq!(
            report.lines(),
            [
                "Audi A4 30000 2020",
                "BMW M5 50000 2022",
                "Total: 80000",
                "Above 40000:",
                "BMW M5 50000 2022",
            ]
        );
    }

    #[test]
    fn registry_counts_each_color() {
        let out = run_to_string(&["lockwatch", "registry", "--color", "red", "--color", "blue"]);
        let lines: Vec<_> = out.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("red "));
        assert!(lines[1].starts_with("blue "));
        assert_eq!(lines[2], "Cars registered: 2");
    }

    #[test]
    fn registry_rejects_blank_color() {
        let cli = Cli::try_parse_from(["lockwatch", "registry", "--color", " "]).unwrap();
        let mut sink: Vec<u8> = Vec::new();
        let err = run(&cli, &mut sink).unwrap_err();
        assert!(err.to_string().contains("color cannot be empty"));
    }

    #[test]
    fn roster_prints_first_names() {
        assert_eq!(run_to_string(&["lockwatch", "roster"]), "Max\nErika\nLukas\n");
    }
}
