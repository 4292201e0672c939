//! English (United States).

use crate::locale::{strings, LocaleDefinition};

pub fn definition() -> LocaleDefinition {
    LocaleDefinition {
        code: "en".to_string(),
        title: "English".to_string(),
        first_names: strings(&[
            "James", "Mary", "Robert", "Patricia", "John", "Jennifer", "Michael", "Linda",
            "David", "Elizabeth", "William", "Barbara", "Richard", "Susan", "Joseph", "Jessica",
            "Thomas", "Sarah", "Charles", "Karen",
        ]),
        last_names: strings(&[
            "Smith", "Johnson", "Williams", "Brown", "Jones", "Garcia", "Miller", "Davis",
            "Rodriguez", "Martinez", "Hernandez", "Lopez", "Wilson", "Anderson", "Thomas",
            "Taylor", "Moore", "Jackson", "Martin", "Lee",
        ]),
        words: strings(&[
            "lorem", "ipsum", "dolor", "sit", "amet", "consectetur", "adipiscing", "elit",
            "sed", "do", "eiusmod", "tempor", "incididunt", "ut", "labore", "et", "dolore",
            "magna", "aliqua", "enim", "minim", "veniam", "quis", "nostrud", "exercitation",
            "ullamco", "laboris", "nisi", "aliquip", "commodo",
        ]),
        cities: strings(&[
            "Springfield", "Riverside", "Franklin", "Greenville", "Bristol", "Clinton",
            "Fairview", "Salem", "Madison", "Georgetown", "Arlington", "Ashland", "Dover",
            "Oxford", "Jackson",
        ]),
        countries: strings(&[
            "United States", "Canada", "Mexico", "United Kingdom", "Ireland", "Australia",
            "New Zealand", "Germany", "France", "Spain", "Italy", "Japan", "Brazil", "India",
            "South Africa",
        ]),
        street_names: strings(&[
            "Main", "Oak", "Pine", "Maple", "Cedar", "Elm", "Washington", "Lake", "Hill",
            "Park", "Walnut", "Sunset",
        ]),
        street_suffixes: strings(&["Street", "Avenue", "Road", "Lane", "Drive", "Court", "Way"]),
        address_format: "{number} {street} {suffix}".to_string(),
        phone_formats: strings(&["###-###-####", "(###) ###-####", "1-###-###-####"]),
        postcode_formats: strings(&["#####", "#####-####"]),
        email_domains: strings(&["gmail.com", "yahoo.com", "hotmail.com"]),
        domain_suffixes: strings(&["com", "net", "org", "info", "biz"]),
    }
}
