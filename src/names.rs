use rand::seq::IndexedRandom;

const ANIMALS: &[&str] = &[
    "aardvark", "albatross", "alpaca", "anteater", "antelope", "armadillo", "badger", "barracuda",
    "beaver", "bison", "bobcat", "buffalo", "camel", "capybara", "caribou", "cheetah", "chinchilla",
    "cobra", "condor", "coyote", "crane", "dingo", "dolphin", "dugong", "eagle", "elephant", "elk",
    "falcon", "ferret", "finch", "flamingo", "gazelle", "gecko", "gibbon", "giraffe", "gorilla",
    "hedgehog", "heron", "hippo", "ibex", "iguana", "impala", "jackal", "jaguar", "kangaroo",
    "koala", "lemur", "leopard", "llama", "lynx", "macaw", "manatee", "marmot", "meerkat", "mink",
    "moose", "narwhal", "newt", "ocelot", "octopus", "orca", "osprey", "otter", "owl", "panda",
    "panther", "pelican", "penguin", "puffin", "quail", "quokka", "raccoon", "raven", "reindeer",
    "salamander", "seal", "sloth", "sparrow", "stingray", "swan", "tapir", "tiger", "toucan",
    "turtle", "walrus", "weasel", "whale", "wolf", "wombat", "yak", "zebra",
];

const ADJECTIVES: &[&str] = &[
    "able", "agile", "amber", "ancient", "bold", "brave", "bright", "brisk", "calm", "careful",
    "cheerful", "clever", "cosmic", "curious", "daring", "eager", "early", "electric", "elegant",
    "fancy", "fearless", "fluffy", "frosty", "gentle", "giant", "golden", "graceful", "happy",
    "hidden", "honest", "humble", "icy", "jolly", "keen", "kind", "lively", "lucky", "mellow",
    "mighty", "misty", "modest", "nimble", "noble", "patient", "polite", "proud", "quick", "quiet",
    "rapid", "rare", "rustic", "shiny", "silent", "silver", "sleepy", "smooth", "snowy", "sturdy",
    "sunny", "swift", "tender", "tidy", "tiny", "tranquil", "vast", "vivid", "warm", "wild",
    "wise", "witty", "young", "zealous",
];

/// Source of default instance names
pub trait NameGenerator {
    fn generate(&self) -> String;
}

/// `animal-adjective` names such as `otter-brave`
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomNames;

impl NameGenerator for RandomNames {
    fn generate(&self) -> String {
        let mut rng = rand::rng();
        let animal = ANIMALS.choose(&mut rng).copied().unwrap_or("instance");
        let adjective = ADJECTIVES.choose(&mut rng).copied().unwrap_or("new");
        format!("{animal}-{adjective}")
    }
}

/// Always the same name, for reproducible runs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixedName(pub String);

impl NameGenerator for FixedName {
    fn generate(&self) -> String {
        self.0.clone()
    }
}
