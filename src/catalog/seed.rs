//! Demo listings for Pune: tanker suppliers, water ATMs and reservoirs.

use super::source::{Availability, Category, MapPoint, SourceKind, WaterSource};
use once_cell::sync::Lazy;

/// Tanker suppliers, in listing order.
pub static TANKERS: Lazy<Vec<WaterSource>> = Lazy::new(|| {
    vec![
        source(
            "1",
            "AquaSupply Tanker Service",
            SourceKind::Tanker,
            "+91-98765-43210",
            "Pune Camp, Maharashtra 411001",
            1.2,
            "₹200/1000L",
            Availability::Available,
            "5000L Tank",
            "6:00 AM - 10:00 PM",
        ),
        source(
            "2",
            "Blue Drop Water Services",
            SourceKind::Tanker,
            "+91-98765-43212",
            "Shivaji Nagar, Pune 411016",
            2.5,
            "₹180/1000L",
            Availability::Limited,
            "3000L Tank",
            "7:00 AM - 9:00 PM",
        ),
        source(
            "3",
            "Reliable Water Supply Co.",
            SourceKind::Tanker,
            "+91-98765-43214",
            "Kothrud, Pune 411038",
            3.2,
            "₹220/1000L",
            Availability::Unavailable,
            "8000L Tank",
            "8:00 AM - 8:00 PM",
        ),
        source(
            "4",
            "Crystal Clear Tankers",
            SourceKind::Tanker,
            "+91-98765-43216",
            "Wakad, Pune 411057",
            4.5,
            "₹190/1000L",
            Availability::Available,
            "4000L Tank",
            "5:00 AM - 11:00 PM",
        ),
    ]
});

/// Water ATMs, in listing order.
pub static ATMS: Lazy<Vec<WaterSource>> = Lazy::new(|| {
    vec![
        source(
            "1",
            "Smart Water ATM - Station Road",
            SourceKind::Atm,
            "+91-98765-43211",
            "Station Road, Pune 411005",
            0.8,
            "₹1/L",
            Availability::Available,
            "20L/min",
            "24/7",
        ),
        source(
            "2",
            "Pure Water ATM - Mall Plaza",
            SourceKind::Atm,
            "+91-98765-43213",
            "FC Road, Pune 411004",
            1.8,
            "₹0.50/L",
            Availability::Available,
            "15L/min",
            "24/7",
        ),
        source(
            "3",
            "Quick Water ATM - Tech Park",
            SourceKind::Atm,
            "+91-98765-43215",
            "Hinjewadi, Pune 411057",
            4.1,
            "₹1.20/L",
            Availability::Available,
            "25L/min",
            "24/7",
        ),
        source(
            "4",
            "Eco Water ATM - University",
            SourceKind::Atm,
            "+91-98765-43217",
            "University Road, Pune 411007",
            2.3,
            "₹0.80/L",
            Availability::Limited,
            "12L/min",
            "6:00 AM - 11:00 PM",
        ),
        source(
            "5",
            "Smart H2O ATM - Market Square",
            SourceKind::Atm,
            "+91-98765-43218",
            "Market Yard, Pune 411037",
            3.7,
            "₹1.50/L",
            Availability::Unavailable,
            "18L/min",
            "24/7",
        ),
    ]
});

/// Reservoirs shown on the map.
pub static RESERVOIRS: Lazy<Vec<MapPoint>> = Lazy::new(|| {
    [
        ("dam-1", "Khadakwasla Dam", "Khadakwasla, Pune"),
        ("dam-2", "Panshet Dam", "Panshet, Velhe, Pune"),
        ("dam-3", "Varasgaon Dam", "Varasgaon, Velhe, Pune"),
        ("dam-4", "Temghar Dam", "Temghar, Mulshi, Pune"),
    ]
    .into_iter()
    .map(|(id, name, address)| MapPoint {
        id: id.to_string(),
        name: name.to_string(),
        address: address.to_string(),
        category: Category::Dam,
        distance_km: None,
    })
    .collect()
});

/// Every map pin: tankers, then ATMs, then reservoirs.
pub fn map_points() -> Vec<MapPoint> {
    TANKERS.iter().chain(ATMS.iter()).map(MapPoint::from).chain(RESERVOIRS.iter().cloned()).collect()
}

#[allow(clippy::too_many_arguments)]
fn source(
    id: &str,
    name: &str,
    kind: SourceKind,
    contact: &str,
    address: &str,
    distance_km: f64,
    price: &str,
    availability: Availability,
    capacity: &str,
    hours: &str,
) -> WaterSource {
    WaterSource {
        id: id.to_string(),
        name: name.to_string(),
        address: address.to_string(),
        kind,
        contact: contact.to_string(),
        distance_km,
        price: price.to_string(),
        availability,
        capacity: Some(capacity.to_string()),
        hours: Some(hours.to_string()),
    }
}
