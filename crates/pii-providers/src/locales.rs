//! Master provider lists per locale.
//!
//! The en_US list is the reference set; de_DE reuses it with
//! German-specific synthesizers swapped in for the handful of labels
//! whose format differs by country.

use crate::category::Category;
use crate::provider::Provider;
use pii_synth::generators::{contact, filler, financial, identity, internet, location, person,
    temporal};
use pii_synth::{Synthesizer, ValueKind};

fn p(
    label: &str,
    aliases: &[&str],
    kind: ValueKind,
    synth: Synthesizer,
    category: Category,
) -> (Provider, Category) {
    (Provider::new(label, aliases, kind, synth), category)
}

/// The en_US PII provider list with category assignments, plus the
/// non-PII filler providers.
pub fn en_us_master() -> (Vec<(Provider, Category)>, Vec<Provider>) {
    use Category::*;
    use ValueKind::{Bool, Date, DateTime, Decimal, Int, String as Str};

    let pii = vec![
        // ------ Names ------
        p(
            "person",
            &[
                "full name",
                "account name",
                "artist name",
                "contact name",
                "login name",
                "user name",
                "customer",
                "user",
                "buyer user name",
                "shareholder",
                "owner",
            ],
            Str,
            person::full_name,
            Name,
        ),
        p(
            "first_name",
            &["given name", "middle name"],
            Str,
            person::first_name,
            Name,
        ),
        p(
            "last_name",
            &["family name", "surname"],
            Str,
            person::last_name,
            Name,
        ),
        p(
            "company",
            &[
                "organization",
                "company name",
                "department",
                "manufacturer",
                "client",
                "business name",
                "business",
                "doing business as",
            ],
            Str,
            person::company,
            Name,
        ),
        p("nationality", &[], Str, person::nationality, Name),
        // ------ Location ------
        p(
            "address",
            &["home", "work", "venue", "place", "facility"],
            Str,
            location::full_address,
            Location,
        ),
        p(
            "street_address",
            &["street", "avenue", "alley"],
            Str,
            location::street_address,
            Location,
        ),
        p(
            "country",
            &["destination", "origin"],
            Str,
            location::country,
            Location,
        ),
        p(
            "country_code",
            &["to country code", "from country code", "phone country code"],
            Str,
            location::country_code,
            Location,
        ),
        p(
            "state",
            &["province", "region", "federal state"],
            Str,
            location::state,
            Location,
        ),
        p(
            "city",
            &["bank city", "municipality", "urban area"],
            Str,
            location::city,
            Location,
        ),
        p(
            "postcode",
            &["post code", "postal code", "zip code", "zip"],
            Str,
            location::postcode,
            Location,
        ),
        p(
            "building_number",
            &["house", "building", "apartment"],
            Str,
            location::building_number,
            Location,
        ),
        p(
            "street_name",
            &["road", "lane", "drive"],
            Str,
            location::street_name,
            Location,
        ),
        p(
            "coordinate",
            &["location", "position"],
            Str,
            location::coordinate,
            Location,
        ),
        p("latitude", &["lat"], Decimal, location::latitude, Location),
        p("longitude", &["lon"], Decimal, location::longitude, Location),
        p("airport_name", &["airport"], Str, location::airport_name, Location),
        p(
            "airport_code",
            &[
                "origin airport code",
                "arrival airport code",
                "destination airport code",
                "iata",
            ],
            Str,
            location::airport_code,
            Location,
        ),
        // ------ Financial ------
        p(
            "bank_account",
            &["bank account number", "bank account", "bban"],
            Str,
            financial::bank_account,
            Financial,
        ),
        p(
            "routing_number",
            &["routing transit number", "aba"],
            Str,
            financial::routing_number,
            Financial,
        ),
        p(
            "iban",
            &["international bank account number"],
            Str,
            financial::iban,
            Financial,
        ),
        p(
            "credit_card_number",
            &[
                "credit card",
                "debit card",
                "master card",
                "visa",
                "american express",
                "card number",
            ],
            Str,
            financial::credit_card_number,
            Financial,
        ),
        p(
            "credit_card_expire",
            &[
                "credit card expiration date",
                "expiration date",
                "expiration",
                "expires",
            ],
            Str,
            financial::card_expiry,
            Financial,
        ),
        p("swift", &["swift code", "bic"], Str, financial::swift_code, Financial),
        p(
            "currency_code",
            &["fare currency", "currency"],
            Str,
            financial::currency_code,
            Financial,
        ),
        // ------ Time ------
        p("day_of_week", &["week day"], Str, temporal::day_of_week, Temporal),
        p(
            "date_of_birth",
            &["birth day", "birth date"],
            Date,
            temporal::date_of_birth,
            Temporal,
        ),
        p(
            "date",
            &[
                "modified date",
                "open date",
                "to date",
                "from date",
                "day",
                "departure date",
                "return date",
                "start date",
                "end date",
                "travel date",
                "install date",
            ],
            Date,
            temporal::date,
            Temporal,
        ),
        p("year", &["birth year"], Int, temporal::year, Temporal),
        p("month", &["birth month"], Str, temporal::month, Temporal),
        p(
            "date_time",
            &[
                "time stamp",
                "timestamp",
                "last modified",
                "modified after",
                "modified before",
                "from timestamp",
                "to timestamp",
                "end time",
                "start time",
                "last updated",
                "created",
                "unix time",
                "start",
                "end",
            ],
            DateTime,
            temporal::datetime_iso,
            Temporal,
        ),
        // ------ Identification ------
        p(
            "ssn",
            &["social security number", "id number", "id card"],
            Str,
            identity::ssn,
            Identification,
        ),
        p(
            "passport",
            &[
                "passport number",
                "document number",
                "identity document",
                "national identity",
            ],
            Str,
            identity::passport,
            Identification,
        ),
        p(
            "drivers_license",
            &["driving license", "driver license", "drivers licence"],
            Str,
            identity::drivers_license,
            Identification,
        ),
        p(
            "license_plate",
            &["lic plate", "number plate"],
            Str,
            identity::license_plate,
            Identification,
        ),
        // ------ Contact Info ------
        p(
            "email",
            &["email address", "contact email", "to contact", "e mail"],
            Str,
            contact::email,
            Contact,
        ),
        p(
            "phone_number",
            &[
                "phone",
                "contact phone",
                "associate phone number",
                "mobile number",
                "telephone",
            ],
            Str,
            contact::phone_number,
            Contact,
        ),
        // ------ Demographic ------
        p("gender", &["sexuality", "sex"], Str, person::gender, Demographic),
        p(
            "job",
            &["occupation", "profession", "employment", "vocation", "career"],
            Str,
            person::job,
            Demographic,
        ),
        // ------ Internet / Devices ------
        p("domain_name", &["domain"], Str, internet::domain_name, Internet),
        p(
            "url",
            &["website", "repository", "site", "host name"],
            Str,
            internet::url,
            Internet,
        ),
        p(
            "ip_address",
            &["ipv4", "ipv6", "client ip"],
            Str,
            internet::ip_address,
            Internet,
        ),
        p("mac_address", &["device mac"], Str, internet::mac_address, Internet),
        p(
            "imei",
            &["international mobile equipment identity"],
            Str,
            internet::imei,
            Internet,
        ),
        p(
            "password",
            &["key password", "key store password", "current password"],
            Str,
            internet::password,
            Internet,
        ),
    ];

    let nonpii = vec![
        Provider::new(
            "string",
            &["text", "message", "description", "note"],
            Str,
            filler::string,
        ),
        Provider::new("boolean", &["bool", "flag"], Bool, filler::boolean),
        Provider::new("color", &["hue", "colour"], Str, filler::color),
        Provider::new(
            "random_number",
            &[
                "integer", "int", "number", "to number", "from number", "quantity", "limit",
                "offset", "page size",
            ],
            Int,
            filler::random_number,
        ),
        Provider::new(
            "sha1",
            &[
                "signature sha1",
                "serial",
                "app key",
                "id",
                "org id",
                "statement id",
                "device id",
            ],
            Str,
            filler::hex_token,
        ),
        Provider::new("alphanumeric", &["alnum"], Str, filler::alphanumeric_id),
        Provider::new(
            "uuid",
            &["guid", "request id", "correlation id"],
            Str,
            filler::uuid_v4,
        ),
    ];

    (pii, nonpii)
}

/// de_DE master list: en_US with German synthesizers for the labels
/// whose format is country-specific.
pub fn de_de_master() -> (Vec<(Provider, Category)>, Vec<Provider>) {
    let (mut pii, nonpii) = en_us_master();
    for (provider, _) in &mut pii {
        match provider.label.as_str() {
            "gender" => provider.synth = person::gender_de,
            "passport" => provider.synth = identity::passport_de,
            "drivers_license" => provider.synth = identity::drivers_license_de,
            _ => {}
        }
    }
    (pii, nonpii)
}
