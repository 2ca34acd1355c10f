/// A free-text address broken into the parts the document asks for.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Address {
    /// Street and house number
    pub street_and_number: Option<String>,
    /// City
    pub city: Option<String>,
    /// Postcode
    pub postcode: Option<String>,
    /// Two-letter country code
    pub country: Option<String>,
}

/// Split a comma-separated address into its parts.
///
/// Parts are read from the end: with four or more parts the last is the
/// country, the one before it the postcode, the one before that the city, and
/// whatever remains at the front is the street (re-joined, so a building name
/// or unit before the street survives). Shorter addresses fill street, city
/// and postcode in that order. Blank parts are ignored.
///
/// ```
/// # use customs_export::split_address;
/// let address = split_address("Unit 4, 12 Harbour St, Poti, 4400, ge");
/// assert_eq!(address.street_and_number.as_deref(), Some("Unit 4, 12 Harbour St"));
/// assert_eq!(address.city.as_deref(), Some("Poti"));
/// assert_eq!(address.postcode.as_deref(), Some("4400"));
/// assert_eq!(address.country.as_deref(), Some("GE"));
/// ```
pub fn split_address(address: &str) -> Address {
    let mut parts = address
        .split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>();

    let mut result = Address::default();
    if parts.len() >= 4 {
        result.country = parts.pop().map(str::to_uppercase);
        result.postcode = parts.pop().map(str::to_owned);
        result.city = parts.pop().map(str::to_owned);
        result.street_and_number = Some(parts.join(", "));
    } else {
        let mut parts = parts.into_iter();
        result.street_and_number = parts.next().map(str::to_owned);
        result.city = parts.next().map(str::to_owned);
        result.postcode = parts.next().map(str::to_owned);
    }
    result
}
