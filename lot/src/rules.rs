use crate::CarType;

/// Whether a car of category `vehicle` is allowed in a spot of category `spot`.
///
/// Large spots take anything, regular spots take small and regular cars,
/// small spots take small cars only. Electric cars may use any usable spot,
/// while electric spots are kept for electric cars.
pub fn can_park(spot: CarType, vehicle: CarType) -> bool {
    match (spot, vehicle) {
        (CarType::Na, _) | (_, CarType::Na) => false,
        (_, CarType::Electric) => true,
        (CarType::Electric, _) => false,
        (CarType::Small, vehicle) => vehicle == CarType::Small,
        (CarType::Regular, vehicle) => matches!(vehicle, CarType::Small | CarType::Regular),
        (CarType::Large, _) => true,
    }
}
