pub(super) const FIRST_NAMES: &[&str] = &[
    "Abigail", "Alden", "Amelia", "Arlo", "Beatrice", "Bennett", "Camille", "Caspian", "Dahlia",
    "Desmond", "Eleanor", "Emmett", "Fiona", "Flynn", "Genevieve", "Gideon", "Harriet", "Hugo",
    "Imogen", "Ivan", "Juniper", "Jasper", "Katarina", "Kieran", "Lydia", "Leopold", "Marisol",
    "Milo", "Nadia", "Nolan", "Ophelia", "Otto", "Penelope", "Quentin", "Rosalind", "Rufus",
    "Sabine", "Silas", "Theodora", "Tobias", "Ursula", "Vivian", "Wendell", "Xavier", "Yvette",
    "Zane",
];

pub(super) const LAST_NAMES: &[&str] = &[
    "Abernathy", "Bauch", "Carroll", "Dietrich", "Emmerich", "Feeney", "Gorczany", "Hackett",
    "Ishikawa", "Jaskolski", "Kuhlman", "Lindgren", "Marquardt", "Nikolaus", "Okuneva",
    "Prohaska", "Quigley", "Runolfsson", "Schowalter", "Thiel", "Upton", "Volkman", "Wintheiser",
    "Yundt", "Zboncak",
];

pub(super) const WORDS: &[&str] = &[
    "lorem", "ipsum", "dolor", "sit", "amet", "consectetur", "adipisci", "velit", "sed", "quia",
    "non", "numquam", "eius", "modi", "tempora", "incidunt", "ut", "labore", "et", "dolore",
    "magnam", "aliquam", "quaerat", "voluptatem", "enim", "ad", "minima", "veniam", "quis",
    "nostrum", "exercitationem", "ullam", "corporis", "suscipit", "laboriosam", "nisi",
    "aliquid", "ex", "ea", "commodi", "consequatur", "autem", "vel", "eum", "iure",
    "reprehenderit", "qui", "in", "voluptate", "esse", "quam", "nihil", "molestiae", "illum",
    "fugiat", "quo", "voluptas", "nulla", "pariatur", "at", "vero", "accusamus",
];
