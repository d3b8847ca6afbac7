// src/render/world.rs

/// A country the world map knows how to place.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Country {
    /// ISO 3166-1 alpha-2, lower case.
    pub code: &'static str,
    pub name: &'static str,
    /// Approximate centroid, degrees.
    pub lat: f64,
    pub lon: f64,
    /// Land area in km², sizes the drawn region.
    pub area_km2: f64,
}

const fn c(
    code: &'static str,
    name: &'static str,
    lat: f64,
    lon: f64,
    area_km2: f64,
) -> Country {
    Country {
        code,
        name,
        lat,
        lon,
        area_km2,
    }
}

/// Look a country up by its alpha-2 code (case-insensitive).
pub fn by_code(code: &str) -> Option<&'static Country> {
    let code = code.to_ascii_lowercase();
    COUNTRIES.iter().find(|c| c.code == code)
}

/// Every country drawn on the map, sorted by code.
pub static COUNTRIES: &[Country] = &[
    c("ad", "Andorra", 42.5, 1.5, 468.0),
    c("ae", "United Arab Emirates", 24.0, 54.0, 83600.0),
    c("af", "Afghanistan", 33.0, 65.0, 652000.0),
    c("al", "Albania", 41.0, 20.0, 28700.0),
    c("am", "Armenia", 40.0, 45.0, 29700.0),
    c("ao", "Angola", -12.5, 18.5, 1247000.0),
    c("aq", "Antarctica", -80.0, 0.0, 14000000.0),
    c("ar", "Argentina", -34.0, -64.0, 2780000.0),
    c("at", "Austria", 47.3, 13.3, 83900.0),
    c("au", "Australia", -25.0, 135.0, 7690000.0),
    c("az", "Azerbaijan", 40.5, 47.5, 86600.0),
    c("ba", "Bosnia and Herzegovina", 44.0, 18.0, 51200.0),
    c("bd", "Bangladesh", 24.0, 90.0, 148000.0),
    c("be", "Belgium", 50.8, 4.0, 30700.0),
    c("bf", "Burkina Faso", 13.0, -2.0, 274000.0),
    c("bg", "Bulgaria", 43.0, 25.0, 111000.0),
    c("bh", "Bahrain", 26.0, 50.5, 780.0),
    c("bi", "Burundi", -3.5, 30.0, 27800.0),
    c("bj", "Benin", 9.5, 2.3, 115000.0),
    c("bn", "Brunei Darussalam", 4.5, 114.7, 5770.0),
    c("bo", "Bolivia, Plurinational State of", -17.0, -65.0, 1099000.0),
    c("br", "Brazil", -10.0, -55.0, 8516000.0),
    c("bs", "Bahamas", 24.3, -76.0, 13900.0),
    c("bt", "Bhutan", 27.5, 90.5, 38400.0),
    c("bw", "Botswana", -22.0, 24.0, 582000.0),
    c("by", "Belarus", 53.0, 28.0, 207600.0),
    c("bz", "Belize", 17.3, -88.8, 23000.0),
    c("ca", "Canada", 60.0, -95.0, 9985000.0),
    c("cd", "Congo, the Democratic Republic of the", -2.5, 23.5, 2345000.0),
    c("cf", "Central African Republic", 7.0, 21.0, 623000.0),
    c("cg", "Congo", -1.0, 15.0, 342000.0),
    c("ch", "Switzerland", 47.0, 8.0, 41300.0),
    c("ci", "Cote d'Ivoire", 8.0, -5.0, 322500.0),
    c("cl", "Chile", -30.0, -71.0, 756000.0),
    c("cm", "Cameroon", 6.0, 12.0, 475000.0),
    c("cn", "China", 35.0, 105.0, 9597000.0),
    c("co", "Colombia", 4.0, -72.0, 1142000.0),
    c("cr", "Costa Rica", 10.0, -84.0, 51100.0),
    c("cu", "Cuba", 21.5, -80.0, 110000.0),
    c("cv", "Cape Verde", 16.0, -24.0, 4030.0),
    c("cy", "Cyprus", 35.0, 33.0, 9250.0),
    c("cz", "Czech Republic", 49.8, 15.5, 78900.0),
    c("de", "Germany", 51.0, 9.0, 357000.0),
    c("dj", "Djibouti", 11.5, 43.0, 23200.0),
    c("dk", "Denmark", 56.0, 10.0, 43000.0),
    c("do", "Dominican Republic", 19.0, -70.7, 48700.0),
    c("dz", "Algeria", 28.0, 3.0, 2382000.0),
    c("ec", "Ecuador", -2.0, -77.5, 283600.0),
    c("ee", "Estonia", 59.0, 26.0, 45300.0),
    c("eg", "Egypt", 27.0, 30.0, 1002000.0),
    c("eh", "Western Sahara", 24.5, -13.0, 266000.0),
    c("er", "Eritrea", 15.0, 39.0, 117600.0),
    c("es", "Spain", 40.0, -4.0, 506000.0),
    c("et", "Ethiopia", 8.0, 38.0, 1104000.0),
    c("fi", "Finland", 64.0, 26.0, 338000.0),
    c("fj", "Fiji", -18.0, 178.0, 18300.0),
    c("fr", "France", 46.0, 2.0, 552000.0),
    c("ga", "Gabon", -1.0, 11.8, 267700.0),
    c("gb", "United Kingdom", 54.0, -2.0, 243600.0),
    c("ge", "Georgia", 42.0, 43.5, 69700.0),
    c("gf", "French Guiana", 4.0, -53.0, 83500.0),
    c("gh", "Ghana", 8.0, -2.0, 238500.0),
    c("gl", "Greenland", 72.0, -40.0, 2166000.0),
    c("gm", "Gambia", 13.5, -15.5, 11300.0),
    c("gn", "Guinea", 11.0, -10.0, 245900.0),
    c("gq", "Equatorial Guinea", 2.0, 10.0, 28000.0),
    c("gr", "Greece", 39.0, 22.0, 132000.0),
    c("gt", "Guatemala", 15.5, -90.3, 108900.0),
    c("gu", "Guam", 13.5, 144.8, 544.0),
    c("gw", "Guinea-Bissau", 12.0, -15.0, 36100.0),
    c("gy", "Guyana", 5.0, -59.0, 215000.0),
    c("hk", "Hong Kong", 22.3, 114.2, 1100.0),
    c("hn", "Honduras", 15.0, -86.5, 112500.0),
    c("hr", "Croatia", 45.2, 15.5, 56600.0),
    c("ht", "Haiti", 19.0, -72.4, 27750.0),
    c("hu", "Hungary", 47.0, 20.0, 93000.0),
    c("id", "Indonesia", -5.0, 120.0, 1905000.0),
    c("ie", "Ireland", 53.0, -8.0, 70300.0),
    c("il", "Israel", 31.5, 34.8, 22100.0),
    c("in", "India", 20.0, 77.0, 3287000.0),
    c("iq", "Iraq", 33.0, 44.0, 438000.0),
    c("ir", "Iran, Islamic Republic of", 32.0, 53.0, 1648000.0),
    c("is", "Iceland", 65.0, -18.0, 103000.0),
    c("it", "Italy", 42.8, 12.8, 301000.0),
    c("jm", "Jamaica", 18.2, -77.5, 11000.0),
    c("jo", "Jordan", 31.0, 36.0, 89300.0),
    c("jp", "Japan", 36.0, 138.0, 378000.0),
    c("ke", "Kenya", 1.0, 38.0, 580000.0),
    c("kg", "Kyrgyzstan", 41.0, 75.0, 200000.0),
    c("kh", "Cambodia", 13.0, 105.0, 181000.0),
    c("kp", "Korea, Democratic People's Republic of", 40.0, 127.0, 120500.0),
    c("kr", "Korea, Republic of", 37.0, 127.5, 100200.0),
    c("kw", "Kuwait", 29.3, 47.7, 17800.0),
    c("kz", "Kazakhstan", 48.0, 68.0, 2725000.0),
    c("la", "Lao People's Democratic Republic", 18.0, 105.0, 236800.0),
    c("lb", "Lebanon", 33.8, 35.8, 10450.0),
    c("li", "Liechtenstein", 47.2, 9.5, 160.0),
    c("lk", "Sri Lanka", 7.0, 81.0, 65600.0),
    c("lr", "Liberia", 6.5, -9.5, 111400.0),
    c("ls", "Lesotho", -29.5, 28.5, 30400.0),
    c("lt", "Lithuania", 56.0, 24.0, 65300.0),
    c("lu", "Luxembourg", 49.8, 6.2, 2590.0),
    c("lv", "Latvia", 57.0, 25.0, 64600.0),
    c("ly", "Libyan Arab Jamahiriya", 25.0, 17.0, 1760000.0),
    c("ma", "Morocco", 32.0, -5.0, 446500.0),
    c("mc", "Monaco", 43.7, 7.4, 2.0),
    c("md", "Moldova, Republic of", 47.0, 29.0, 33800.0),
    c("me", "Montenegro", 42.5, 19.3, 13800.0),
    c("mg", "Madagascar", -20.0, 47.0, 587000.0),
    c("mk", "Macedonia, the former Yugoslav Republic of", 41.8, 22.0, 25700.0),
    c("ml", "Mali", 17.0, -4.0, 1240000.0),
    c("mm", "Myanmar", 22.0, 98.0, 677000.0),
    c("mn", "Mongolia", 46.0, 105.0, 1564000.0),
    c("mo", "Macao", 22.2, 113.5, 33.0),
    c("mr", "Mauritania", 20.0, -12.0, 1031000.0),
    c("mt", "Malta", 35.9, 14.4, 316.0),
    c("mu", "Mauritius", -20.3, 57.6, 2040.0),
    c("mv", "Maldives", 3.2, 73.0, 300.0),
    c("mw", "Malawi", -13.5, 34.0, 118000.0),
    c("mx", "Mexico", 23.0, -102.0, 1964000.0),
    c("my", "Malaysia", 2.5, 112.5, 330800.0),
    c("mz", "Mozambique", -18.3, 35.0, 801600.0),
    c("na", "Namibia", -22.0, 17.0, 825600.0),
    c("ne", "Niger", 16.0, 8.0, 1267000.0),
    c("ng", "Nigeria", 10.0, 8.0, 923800.0),
    c("ni", "Nicaragua", 13.0, -85.0, 130400.0),
    c("nl", "Netherlands", 52.5, 5.8, 41500.0),
    c("no", "Norway", 62.0, 10.0, 385000.0),
    c("np", "Nepal", 28.0, 84.0, 147500.0),
    c("nz", "New Zealand", -41.0, 174.0, 268000.0),
    c("om", "Oman", 21.0, 57.0, 309500.0),
    c("pa", "Panama", 9.0, -80.0, 75400.0),
    c("pe", "Peru", -10.0, -76.0, 1285000.0),
    c("pg", "Papua New Guinea", -6.0, 147.0, 462800.0),
    c("ph", "Philippines", 13.0, 122.0, 300000.0),
    c("pk", "Pakistan", 30.0, 70.0, 881900.0),
    c("pl", "Poland", 52.0, 20.0, 312700.0),
    c("pr", "Puerto Rico", 18.2, -66.5, 9100.0),
    c("ps", "Palestine, State of", 32.0, 35.2, 6020.0),
    c("pt", "Portugal", 39.5, -8.0, 92200.0),
    c("py", "Paraguay", -23.0, -58.0, 406800.0),
    c("qa", "Qatar", 25.5, 51.3, 11600.0),
    c("re", "Reunion", -21.1, 55.6, 2510.0),
    c("ro", "Romania", 46.0, 25.0, 238400.0),
    c("rs", "Serbia", 44.0, 21.0, 88400.0),
    c("ru", "Russian Federation", 60.0, 100.0, 17100000.0),
    c("rw", "Rwanda", -2.0, 30.0, 26300.0),
    c("sa", "Saudi Arabia", 25.0, 45.0, 2150000.0),
    c("sb", "Solomon Islands", -8.0, 159.0, 28900.0),
    c("sc", "Seychelles", -4.6, 55.7, 459.0),
    c("sd", "Sudan", 15.0, 30.0, 1886000.0),
    c("se", "Sweden", 62.0, 15.0, 450000.0),
    c("sg", "Singapore", 1.4, 103.8, 728.0),
    c("sh", "Saint Helena, Ascension and Tristan da Cunha", -15.9, -5.7, 394.0),
    c("si", "Slovenia", 46.1, 14.8, 20300.0),
    c("sk", "Slovakia", 48.7, 19.5, 49000.0),
    c("sl", "Sierra Leone", 8.5, -11.5, 71700.0),
    c("sm", "San Marino", 43.9, 12.4, 61.0),
    c("sn", "Senegal", 14.0, -14.0, 196700.0),
    c("so", "Somalia", 10.0, 49.0, 637700.0),
    c("sr", "Suriname", 4.0, -56.0, 163800.0),
    c("ss", "South Sudan", 7.0, 30.0, 619700.0),
    c("st", "Sao Tome and Principe", 1.0, 7.0, 964.0),
    c("sv", "El Salvador", 13.8, -88.9, 21000.0),
    c("sy", "Syrian Arab Republic", 35.0, 38.0, 185200.0),
    c("sz", "Swaziland", -26.5, 31.5, 17400.0),
    c("td", "Chad", 15.0, 19.0, 1284000.0),
    c("tg", "Togo", 8.0, 1.2, 56800.0),
    c("th", "Thailand", 15.0, 100.0, 513000.0),
    c("tj", "Tajikistan", 39.0, 71.0, 143100.0),
    c("tl", "Timor-Leste", -8.8, 125.9, 14900.0),
    c("tm", "Turkmenistan", 40.0, 60.0, 488100.0),
    c("tn", "Tunisia", 34.0, 9.0, 163600.0),
    c("tr", "Turkey", 39.0, 35.0, 783600.0),
    c("tt", "Trinidad and Tobago", 10.7, -61.2, 5130.0),
    c("tw", "Taiwan, Province of China", 23.5, 121.0, 36200.0),
    c("tz", "Tanzania, United Republic of", -6.0, 35.0, 947300.0),
    c("ua", "Ukraine", 49.0, 32.0, 603600.0),
    c("ug", "Uganda", 1.0, 32.0, 241000.0),
    c("us", "United States", 38.0, -97.0, 9834000.0),
    c("uy", "Uruguay", -33.0, -56.0, 176200.0),
    c("uz", "Uzbekistan", 41.0, 64.0, 448900.0),
    c("va", "Holy See (Vatican City State)", 41.9, 12.45, 0.44),
    c("ve", "Venezuela, Bolivarian Republic of", 8.0, -66.0, 916400.0),
    c("vn", "Viet Nam", 16.0, 106.0, 331200.0),
    c("ye", "Yemen", 15.5, 47.5, 528000.0),
    c("yt", "Mayotte", -12.8, 45.2, 374.0),
    c("za", "South Africa", -29.0, 24.0, 1221000.0),
    c("zm", "Zambia", -15.0, 30.0, 752600.0),
    c("zw", "Zimbabwe", -20.0, 30.0, 390800.0),
];
