//! The well-known scalar table.
//!
//! Entries are (name, description, specification URL). Order follows the
//! conventional grouping: date/time, string formats, numeric ranges,
//! identifiers, network, color, money, structured, and registry codes.

/// All catalogued scalars.
pub(crate) const WELL_KNOWN: &[(&str, &str, Option<&str>)] = &[
    // Date and time
    ("Date", "A date string in YYYY-MM-DD format.", Some("https://tools.ietf.org/html/rfc3339")),
    ("Time", "A time string at UTC in HH:mm:ss.SSSZ format.", Some("https://tools.ietf.org/html/rfc3339")),
    ("DateTime", "A date-time string at UTC, compliant with the date-time profile of RFC 3339.", Some("https://tools.ietf.org/html/rfc3339")),
    ("DateTimeISO", "A date-time string in ISO 8601 format.", Some("https://www.iso.org/iso-8601-date-and-time-format.html")),
    ("Timestamp", "The number of seconds that have elapsed since the Unix epoch.", None),
    ("TimeZone", "A time zone name from the IANA time zone database.", Some("https://www.iana.org/time-zones")),
    ("UtcOffset", "A UTC offset string in ±hh:mm format.", None),
    ("Duration", "A signed duration string in ISO 8601 format.", Some("https://www.iso.org/iso-8601-date-and-time-format.html")),
    ("ISO8601Duration", "An unsigned duration string in ISO 8601 format.", Some("https://www.iso.org/iso-8601-date-and-time-format.html")),
    ("LocalDate", "A local date string in YYYY-MM-DD format, without time zone.", None),
    ("LocalTime", "A local time string in HH:mm[:ss[.SSS]] format, without time zone.", None),
    ("LocalDateTime", "A local date-time string without time zone.", None),
    ("LocalEndTime", "A local time string that additionally allows 24:00 as an end-of-day marker.", None),
    // String formats
    ("EmailAddress", "An email address, validated against the HTML specification's email production.", Some("https://html.spec.whatwg.org/multipage/input.html#valid-e-mail-address")),
    ("NegativeFloat", "A float strictly less than zero.", None),
    ("NegativeInt", "An integer strictly less than zero.", None),
    ("NonEmptyString", "A string with at least one character.", None),
    ("NonNegativeFloat", "A float greater than or equal to zero.", None),
    ("NonNegativeInt", "An integer greater than or equal to zero.", None),
    ("NonPositiveFloat", "A float less than or equal to zero.", None),
    ("NonPositiveInt", "An integer less than or equal to zero.", None),
    ("PhoneNumber", "A phone number in E.164 format.", Some("https://www.itu.int/rec/T-REC-E.164")),
    ("PositiveFloat", "A float strictly greater than zero.", None),
    ("PositiveInt", "An integer strictly greater than zero.", None),
    ("PostalCode", "A postal code.", None),
    ("UnsignedFloat", "A float greater than or equal to zero.", None),
    ("UnsignedInt", "An integer greater than or equal to zero.", None),
    ("URL", "A URL string, compliant with the WHATWG URL standard.", Some("https://url.spec.whatwg.org")),
    // Numbers beyond Int
    ("BigInt", "An arbitrary-precision integer, serialized as a string.", None),
    ("Byte", "A byte value, serialized as base64 or a hex string.", None),
    ("Long", "A 64-bit signed integer.", None),
    ("SafeInt", "An integer within the IEEE 754 safe-integer range.", Some("https://www.ecma-international.org/ecma-262/#sec-number.issafeinteger")),
    // Identifiers
    ("UUID", "A universally unique identifier string.", Some("https://tools.ietf.org/html/rfc4122")),
    ("GUID", "A globally unique identifier string.", Some("https://tools.ietf.org/html/rfc4122")),
    ("Hexadecimal", "A string of hexadecimal digits.", None),
    ("HexColorCode", "A hexadecimal color code such as #ff0000.", None),
    ("HSL", "A CSS hsl() color string.", Some("https://developer.mozilla.org/en-US/docs/Web/CSS/color_value#hsl_colors")),
    ("HSLA", "A CSS hsla() color string.", Some("https://developer.mozilla.org/en-US/docs/Web/CSS/color_value#hsl_colors")),
    // Network
    ("IP", "An IPv4 or IPv6 address.", None),
    ("IPv4", "An IPv4 address in dotted-quad notation.", Some("https://tools.ietf.org/html/rfc791")),
    ("IPv6", "An IPv6 address.", Some("https://tools.ietf.org/html/rfc8200")),
    ("ISBN", "An International Standard Book Number, ISBN-10 or ISBN-13.", None),
    ("JWT", "A JSON Web Token string.", Some("https://tools.ietf.org/html/rfc7519")),
    ("Latitude", "A decimal latitude between -90 and 90.", None),
    ("Longitude", "A decimal longitude between -180 and 180.", None),
    ("MAC", "An IEEE 802 MAC address.", None),
    ("Port", "A TCP or UDP port number between 0 and 65535.", None),
    // Color
    ("RGB", "A CSS rgb() color string.", Some("https://developer.mozilla.org/en-US/docs/Web/CSS/color_value#rgb_colors")),
    ("RGBA", "A CSS rgba() color string.", Some("https://developer.mozilla.org/en-US/docs/Web/CSS/color_value#rgb_colors")),
    // Money
    ("USCurrency", "A US dollar amount in cents.", None),
    ("Currency", "An ISO 4217 currency code.", Some("https://www.iso.org/iso-4217-currency-codes.html")),
    // Structured
    ("JSON", "An arbitrary JSON value.", Some("https://ecma-international.org/publications-and-standards/standards/ecma-404/")),
    ("JSONObject", "A JSON object.", Some("https://ecma-international.org/publications-and-standards/standards/ecma-404/")),
    ("IBAN", "An International Bank Account Number.", None),
    ("ObjectID", "A BSON ObjectID string.", None),
    ("Void", "Represents the absence of a value; always serializes to null.", None),
    // Registry codes
    ("DID", "A decentralized identifier string.", Some("https://www.w3.org/TR/did-core/")),
    ("CountryCode", "An ISO 3166-1 alpha-2 country code.", Some("https://www.iso.org/iso-3166-country-codes.html")),
    ("Locale", "A BCP 47 language tag.", Some("https://tools.ietf.org/html/bcp47")),
    ("RoutingNumber", "An ABA routing transit number.", None),
    ("AccountNumber", "A US bank account number, 5 to 17 digits.", None),
    ("Cuid", "A collision-resistant unique identifier string.", None),
    ("SemVer", "A semantic version string.", Some("https://semver.org/spec/v2.0.0.html")),
    ("SESSN", "A Swedish personal identity number.", None),
    ("DeweyDecimal", "A Dewey Decimal Classification number.", None),
    ("LCCSubclass", "A Library of Congress Classification subclass.", None),
    ("IPCPatent", "An International Patent Classification code.", None),
];
