// src/models/catalog.rs
//
// Built-in model table, stored in the same letter encoding the dump
// format uses and parsed once at startup. Entries whose source listed
// fewer than 24 joints are padded with Z, matching the original data.

/// (name, 24 space-separated Z/L/P/R letters)
pub(crate) const BUILTIN: &[(&str, &str)] = &[
    ("ball", "R R L L R L R R L R L L R R L L R L R R L R L Z"),
    ("snow", "R R R R L L L L R R R R L L L L R R R R L L L Z"),
    ("propellor", "Z Z Z R L R Z L Z Z Z R L R Z L Z Z Z R L R Z L"),
    ("flamingo", "Z P Z Z Z Z Z P R R P R L P L R P R R Z Z Z P Z"),
    ("cat", "Z P P Z P P Z R Z P P Z P P Z P P Z Z Z Z Z Z Z"),
    ("rooster", "Z Z P P Z L Z L R P R Z P P Z R P R L Z L Z P Z"),
    ("half balls", "L L R L R R L R L L L L L L R L R R L R L L L Z"),
    ("zigzag1", "R R R L L L R R R L L L R R R L L L R R R L L Z"),
    ("zigzag2", "P Z P Z P Z P Z P Z P Z P Z P Z P Z P Z P Z P Z"),
    ("zigzag3", "P L P L P L P L P L P L P L P L P L P L P L P Z"),
    ("caterpillar", "R R P L L P R R P L L P R R P L L P R R P L L Z"),
    ("bow", "R L R R R L L L R L R R R L L L R L R R R L L Z"),
    ("turtle", "Z R L Z Z R L P R R L R L L P L L L R L R R R Z"),
    ("basket", "R P Z Z P L Z L L Z L P Z Z P R P L P Z Z P L Z"),
    ("thing", "P R L R R L P L R L L R P R L R R L P L R L L Z"),
    ("straight", "Z Z Z Z Z Z Z Z Z Z Z Z Z Z Z Z Z Z Z Z Z Z Z Z"),
    ("hexagon", "Z Z Z Z L Z Z R Z Z Z Z L Z Z R Z Z Z Z L Z Z R"),
    ("tri1", "Z Z L R Z L Z R Z Z L R Z L Z R Z Z L R Z L Z R"),
    ("triangle", "Z Z Z Z Z Z L R Z Z Z Z Z Z L R Z Z Z Z Z Z L R"),
    ("flower", "Z L P R R P Z L P R R P Z L P R R P Z L P R R P"),
    ("crucifix", "Z P P Z P Z P P Z P Z P P Z P Z Z Z P P Z Z Z P"),
    ("kayak", "P R L P L P Z Z R P L Z Z Z Z Z Z R P L Z Z P R"),
    ("bird", "Z Z Z Z R R Z L P R Z R Z R Z R P L Z R L Z P Z"),
    ("seal", "R L L P R L Z P P Z L Z L P R Z L L L P R R L Z"),
    ("dog", "Z Z Z Z P P Z P Z Z P Z P P Z Z Z P Z P P Z P Z"),
    ("frog", "R R L L R P R P L P R Z L Z L P R Z L L R L L Z"),
    ("quavers", "L L R L R R Z Z Z R Z Z L R Z Z Z L L R L R R Z"),
    ("fly", "L L R L R R Z P Z Z L P R Z Z P Z L L R L R R Z"),
    ("puppy", "Z P Z P P Z P P Z Z Z R R P R L P L R P R L Z Z"),
    ("stars", "L R P R L P L R P R Z Z Z R P R L P L R P R L Z"),
    ("mountains", "R P R P R P L P L P L P R P R P R P L P L P L P"),
    ("quad1", "R P R R R P L L L P L P R P R R R P L L L P L P"),
    ("quad2", "Z P R R R P L L L P Z P Z P R R R P L L L P Z P"),
    ("glasses", "Z P Z R R P L L Z P Z P Z P Z R R P L L Z P Z P"),
    ("em", "Z P Z Z R P L Z Z P Z P Z P Z Z R P L Z Z P Z P"),
    ("quad3", "Z R Z Z R P L Z Z L Z P Z R Z Z R P L Z Z L Z P"),
    ("vee", "Z Z Z Z R P L Z Z Z Z P Z Z Z Z R P L Z Z Z Z P"),
    ("square", "Z Z Z R R P L L Z Z Z P Z Z Z R R P L L Z Z Z P"),
    ("eagle", "R Z Z R R P L L Z Z L P R Z Z R R P L L Z Z L P"),
    ("volcano", "R Z L R R P L L R Z L P R Z L R R P L L R Z L P"),
    ("saddle", "R Z L Z R P L Z R Z L P R Z L Z R P L Z R Z L P"),
    ("c3d", "Z Z R Z Z P Z Z L Z Z P Z Z R Z Z P Z Z L Z Z P"),
    ("block", "Z Z P P Z R P L P R P R P L P R Z Z P Z Z L P R"),
    ("duck", "L P L P Z P P Z P Z L P R Z P Z P P Z Z L P L Z"),
    ("prayer", "R R R L R L L Z Z Z R P L Z Z Z R R L R L L L P"),
    ("giraffe", "Z Z Z R P L Z Z Z R R R P L R Z P Z L R P L L L"),
    ("tie fighter", "P L R L L P R Z R L Z P L L R R R P L Z L R Z Z"),
    ("Strong Arms", "P P Z Z P Z Z R Z R R P R R Z R Z Z P Z Z P P Z"),
    ("cool gegl", "P P Z Z R Z Z P P Z L Z Z P Z P P Z L R P Z Z Z"),
    ("knuckledusters", "Z Z Z Z P R Z P P Z P P Z R R Z P P Z P P Z R Z"),
    ("lightsabre", "Z Z Z Z Z P P Z Z Z Z Z Z Z Z Z Z Z Z Z Z Z Z Z"),
    ("not a stairway", "L Z R L R Z L R L Z R L R Z L R L Z R L R Z L Z"),
    ("box", "Z Z Z Z P Z Z Z Z Z Z P Z Z Z Z P Z Z Z Z Z Z Z"),
    ("kissy box", "P Z Z Z P Z Z Z Z Z Z P Z Z Z Z P Z Z Z Z Z P Z"),
    ("mask", "Z R L P R R P Z Z P Z Z P Z P Z P Z Z P Z Z Z Z"),
    ("poles or columns or something", "L R L Z Z Z P P Z Z Z L R L Z Z Z P P Z Z Z L Z"),
    ("crooked v", "Z L Z Z Z Z P P Z Z Z L Z L Z Z Z P P Z Z Z Z Z"),
    ("dog leg", "Z L Z Z Z Z P P Z Z Z L Z R Z Z Z Z P P Z Z Z Z"),
    ("scrubby", "Z Z Z Z Z L Z Z Z Z L R Z Z Z Z L R Z Z L P Z Z"),
    ("voltron's eyes", "Z Z P R Z L Z Z R Z L P Z Z P Z L Z R L Z R Z Z"),
    ("flying toaster", "P Z Z P P Z R Z P P Z R Z P P Z R Z P P Z Z P Z"),
    ("dubbya", "P Z Z P P Z R Z P P Z Z Z P P Z R Z P P Z Z P Z"),
    ("tap handle", "P Z Z P P Z R Z P P Z L Z P P Z R Z P P Z Z P Z"),
    ("wingnut", "P Z Z P P Z R Z P P Z P Z P P Z R Z P P Z Z P Z"),
    ("tight twist", "R Z Z L Z L R Z R L R P R L R Z R L Z L Z Z R Z"),
    ("double helix", "R Z R Z R Z R Z R Z R Z R L R P Z R Z R Z R Z Z"),
    ("Abstract", "R L R Z P Z L R L P Z Z P L R L Z P Z R L R Z Z"),
    ("AlanH1", "L R Z R L Z Z R L P R R L R L L R R R P R L P Z"),
    ("AlanH2", "L R Z R L Z Z R L P R R L R L L R R L L R L R Z"),
    ("AlanH3", "L R Z R L Z Z R L P R R L R L L R R L P L R P Z"),
    ("AlanH4", "Z Z P L R L Z R L R Z P Z L R L Z R L R P Z Z Z"),
    ("Alien", "R L R P Z Z P R L R Z P P Z L L R R L L Z P P Z"),
    ("Angel", "Z R L P R R R L L R L R R L L L P R L Z Z R L Z"),
    ("AnotherFigure", "L P R Z Z P R L L P R L Z P Z R L P R R L P Z Z"),
    ("Ball", "L R L R R L R L L R L R R L R L L R L R R L R Z"),
    ("Basket", "Z R R Z R R Z R L Z L L P R L Z L R P L L Z L Z"),
    ("Beetle", "P L R Z L L R L R R L R L L R L R R Z L R P R Z"),
    ("Bone", "P P L Z P P Z L Z Z Z Z Z Z Z R Z P P Z R P P Z"),
    ("Bow", "L L L R L R R R L L L R L R R R L L L R L R R Z"),
    ("Bra", "R R L L R L R R L L L R R R L L R L R R L L L Z"),
    ("BronchoSaurian", "Z P Z P P Z P Z Z P Z P P Z Z Z Z Z Z Z Z Z P Z"),
    ("Cactus", "P L Z P P Z R P L Z Z P R P L Z Z R P L P Z Z Z"),
    ("Camel", "R Z P R P R Z R P R L P L R P R Z R P R Z Z L Z"),
    ("Candlestick", "L P L Z R P L Z R P R P L P L Z R P L Z R P R Z"),
    ("Cat", "Z P P Z P P Z R Z P P Z P P Z P P Z Z Z Z Z Z Z"),
    ("Cave", "R Z Z P L Z P P Z R L P R R L L P R R L P Z Z Z"),
    ("Chains", "P Z Z P L L P R R P Z Z P Z Z P L L P R R P Z Z"),
    ("Chair", "R L R R R L R Z Z P P Z P P Z P P Z Z L R L L Z"),
    ("Chick", "R R R P L P L P R R R P L L L P R P R P L L L Z"),
    ("Clockwise", "R R R R R R R R R R R R R R R R R R R R R R R Z"),
    ("Cobra", "Z R L L R L R R L R L L L L Z L R Z Z P Z Z R Z"),
    ("Cobra2", "L Z P Z P L Z P Z L L P R R Z P Z R P Z P Z R Z"),
    ("Cobra3", "Z L Z P P Z P P Z R Z P Z Z L Z Z Z P Z Z Z L Z"),
    ("Compact1", "Z Z P Z Z L P R P L P L P R P L Z P P Z Z L P Z"),
    ("Compact2", "L P R Z Z P P Z R P L Z Z R P R P L P R Z Z Z Z"),
    ("Compact3", "Z P Z P P Z L P R Z P P Z P Z P P Z L P R Z P Z"),
    ("Compact4", "P R Z Z P Z Z P P Z P R P L P Z P P Z Z P Z Z Z"),
    ("Compact5", "L Z L P R P L P L P R P R P L P R Z R P R P L Z"),
    ("Contact", "P Z Z P L L P L R R P L L R P R R P Z Z P R P Z"),
    ("Contact2", "R P Z L L P R R Z P L P R P Z L L P R R Z P L Z"),
    ("Cook", "Z Z P P Z R Z R L P L Z P P Z L P L R Z R Z P Z"),
    ("Counterclockwise", "L L L L L L L L L L L L L L L L L L L L L L L Z"),
    ("Cradle", "L L Z P L R L L R L R R L R P Z R R L L Z Z R Z"),
    ("Crankshaft", "Z P P Z P P Z P L L P R L Z P L P R Z Z Z P R Z"),
    ("Cross", "Z P Z P P Z P Z Z Z P P Z Z Z P Z P P Z P Z P Z"),
    ("Cross2", "Z Z P P Z L Z Z P P Z R Z Z P P Z L Z Z P P Z Z"),
    ("Cross3", "Z Z P P Z L Z Z P P Z R Z Z P P Z L Z Z P P Z Z"),
    ("CrossVersion1", "P Z R P L P R P R P L P R Z P R P R L P L R P Z"),
    ("CrossVersion2", "R L P L L Z R L P R R P L L P R L Z L L P L R Z"),
    ("Crown", "L Z P Z R Z Z L Z P Z R L Z P Z R Z Z L Z P Z Z"),
    ("DNAStrand", "R P R P R P R P R P R P R P R P R P R P R P R Z"),
    ("Diamond", "Z R Z Z L Z Z R P L L R L R R P L Z Z R Z Z L Z"),
    ("Dog", "R R L R L L L R R L R L L R R R L R L L Z L R Z"),
    ("DogFace", "Z Z P P Z L L R P Z P P Z P L R R Z P P Z Z P Z"),
    ("DoublePeak", "Z Z P Z Z R L P L R P R L L Z P Z R R L P L R Z"),
    ("DoubleRoof", "Z L L R R L R L L R L R R L L Z L R P L L P R Z"),
    ("DoubleToboggan", "Z Z Z R P L Z Z Z P P Z Z Z Z L P R Z Z Z Z P Z"),
    ("Doubled", "L P L R P R L P L R L Z L P L P L R P R L P L Z"),
    ("Doubled1", "L P L R P R L P L Z R Z R Z L P L R P R L P L Z"),
    ("Doubled2", "L P L R P R L P L L R Z R L L P L R P R L P L Z"),
    ("DumblingSpoon", "P P Z Z Z Z Z L Z Z L R Z Z L R Z Z R Z Z Z Z Z"),
    ("Embrace", "P Z Z P R P L P Z R P R P L P L Z P R P L P Z Z"),
    ("EndlessBelt", "Z R L Z Z Z L R Z P R L Z L R L P L R L Z L R Z"),
    ("Entrance", "L L R R R L L R L R R R L L L R L R R L L L R Z"),
    ("Esthetic", "L L P R R Z L P R P L P L P R P L Z R L P R R Z"),
    ("Explotion", "R R R R L R L L R R R L R L L L R R L R L L L Z"),
    ("F-ZeroXCar", "R R L R L L P R L Z Z R L Z Z L R P R L P L R Z"),
    ("Face", "Z R P R L P L L P R R P R L P L P L P L R P R Z"),
    ("Fantasy", "L L R P Z R Z L P L P R P R Z L Z P L R R R P Z"),
    ("Fantasy1", "P Z Z P P Z P R L R R P L L R L P Z P P Z Z P Z"),
    ("FaserGun", "Z Z L R P R Z R P R L P L R P R Z R P R R Z P Z"),
    ("FelixW", "Z R Z P L Z L R Z Z R P L Z Z L R Z R P Z L Z Z"),
    ("Flamingo", "Z P Z Z Z Z Z P L L P L R P R L P L L Z Z Z P Z"),
    ("FlatOnTheTop", "Z P P Z P R Z R L P R R P L R Z R Z Z P Z Z P Z"),
    ("Fly", "Z L P R Z P L P L R P R P R P L P L P L R P R Z"),
    ("Fountain", "L R L R R P L P L R R P L L R R P L L R P R P Z"),
    ("Frog", "L L R R L P L P R P L Z R Z R P L Z R R L R R Z"),
    ("Frog2", "L Z L R R P L R Z Z R P L Z Z L R P L L R Z R Z"),
    ("Furby", "P Z L P R Z P P Z P P Z Z P Z R P L Z P Z Z P Z"),
    ("Gate", "Z Z P Z Z R Z P P Z L P L L P R R P R Z P P Z Z"),
    ("Ghost", "L L L R R L R L L R R R P L R Z Z L R Z Z L R Z"),
    ("Globus", "R L Z P L L R R L R L L R L R R L R P Z R L Z Z"),
    ("Grotto", "P P Z L R L Z P R P L Z Z Z Z R P L P Z R L R Z"),
    ("H", "P Z P P Z Z Z Z P P Z P L Z P P Z Z Z Z P P Z Z"),
    ("HeadOfDevil", "P Z R Z R P L Z R P R L P L L P R R P R L Z Z Z"),
    ("Heart", "R Z Z Z P L P L R R Z P Z L L R P R P Z Z Z L Z"),
    ("Heart2", "Z P Z Z L Z L Z Z Z Z P Z Z Z Z R Z R Z Z P Z Z"),
    ("Hexagon", "Z Z Z Z L Z Z R Z Z Z Z L Z Z R Z Z Z Z L Z Z Z"),
    ("HoleInTheMiddle1", "Z L R P L L P R L Z L R Z R L P R R P L R Z R Z"),
    ("HoleInTheMiddle2", "Z L R Z R R P L R Z R L Z L R Z R R P L R Z R Z"),
    ("HouseBoat", "R R P L L L P R R R P L R Z L P R P L P L R P Z"),
    ("HouseByHouse", "L P L P L P R P R P R P L P L P L P R P R P R Z"),
    ("Infinity", "L L L R R L L R R L L L L L L R R L L R R L L Z"),
    ("Integral", "R R R R R L L R L R R L L L L L L R R L R L L Z"),
    ("Iron", "Z Z Z Z P R Z R Z Z L P R Z Z R P L Z Z R Z R Z"),
    ("JustSquares", "R R L P L P R P R L L P R R L P L P R P R L L Z"),
    ("Kink", "Z P P Z P Z P P Z Z R P L Z Z P P Z P Z P P Z Z"),
    ("Knot", "L L P L Z L R L P L L R R P R L R Z R P R R L Z"),
    ("Leaf", "Z P P Z Z L Z L Z Z P Z Z R Z R P L Z R P L Z Z"),
    ("LeftAsRight", "R P L R L Z R L P R R P L L P R L Z R L R P L Z"),
    ("Long-necked", "P Z L P L P R P R Z P Z L P L P R P L Z P P Z Z"),
    ("LunaModule", "P L L R L R R L R L L R L R R P L R Z R L Z L Z"),
    ("MagnifyingGlass", "Z Z P Z L Z P P Z Z R P L Z Z P P Z R Z P Z Z Z"),
    ("Mask", "Z Z Z R Z R L Z L P Z P Z Z P Z P R Z R L Z L Z"),
    ("Microscope", "P P Z Z P Z R P Z Z R P L Z Z P L Z P P Z P P Z"),
    ("Mirror", "P R L Z P P Z Z L R Z Z P Z Z L R P R Z P P Z Z"),
    ("MissPiggy", "Z L L P R Z R R P L L R R P L L Z L P R R Z R Z"),
    ("Mole", "Z R Z R L R P Z L P R Z P L R L Z L Z R R P L Z"),
    ("Monk", "L Z P P Z L Z P P Z R Z P P Z R L R R L R L L Z"),
    ("Mountain", "Z R L P R R P L R Z L P L Z R L P R R P L R Z Z"),
    ("Mountains", "Z P Z L P L R P R P R P L P L P L R P R Z P Z Z"),
    ("MouseWithoutTail", "Z P P Z L Z P P Z Z R P L Z Z P P Z R Z P P Z Z"),
    ("Mushroom", "P L L R L R R P L R Z Z L P Z R Z P P Z L Z P Z"),
    ("Necklace", "Z Z L Z Z Z L Z Z Z Z P Z Z Z Z R Z Z Z R Z Z Z"),
    ("NestledAgainst", "L Z P L L R R P Z R P L Z R L P R R L R L L L Z"),
    ("NoClue", "Z R P L L L Z L P R R P L L P R Z R R R P L Z Z"),
    ("Noname", "L P R P R Z P Z Z P P Z P P Z R P L P R P R L Z"),
    ("Obelisk", "P Z Z Z P R P L P L P L R P R P R P L P Z Z Z Z"),
    ("Ostrich", "Z Z P P Z L Z P P Z P P Z R Z P P Z Z Z Z Z P Z"),
    ("Ostrich2", "P P Z P L L L R L R R L R L L R P Z P Z Z P Z Z"),
    ("PairOfGlasses", "Z P Z Z P Z Z P Z L Z P Z R Z P Z Z P Z Z P Z Z"),
    ("Parrot", "Z Z Z Z R R Z L P R Z R Z R Z R P L Z R L Z P Z"),
    ("Penis", "P P R Z P P Z P Z Z R P L Z Z P Z P P Z L P P Z"),
    ("PictureCommingSoon", "L L Z R L P R R P R L P L R P R R P R L Z R R Z"),
    ("Pitti", "L P Z Z P Z Z P Z Z R P L Z Z P Z Z P Z Z P R Z"),
    ("Plait", "L L L L L L L L L L R L R R R R R R R R R R L Z"),
    ("Platform", "R P Z Z Z Z P Z Z P P Z P L Z R L P R R P L R Z"),
    ("PodRacer", "Z P Z P R P Z R P L L P R L Z P P Z Z L Z P L Z"),
    ("Pokemon", "L L R L R R L L L R L R R L L R R L L R L R R Z"),
    ("Prawn", "R P Z P R Z P P Z Z L P R Z Z P P Z L P Z P L Z"),
    ("Propeller", "Z Z Z R Z L R L Z Z Z R Z L R L Z Z Z R Z L R Z"),
    ("Pyramid", "Z L P R Z L P R Z L P R Z P R L L L P R R R L Z"),
    ("QuarterbackTiltedAndReadyToHut", "P Z R R L R P R L R Z P Z L R L P L R L L Z P Z"),
    ("Ra", "P L L L R L R R L R L L Z L L R L R R L R L L Z"),
    ("Rattlesnake", "L Z L Z L Z L L Z L Z L Z L R Z P R R R R R R Z"),
    ("Revelation", "Z Z Z P Z Z P R L L L R R L L R R R L P Z Z P Z"),
    ("Revolution1", "L L P R Z P Z L P R R P L L P R Z P Z L P R R Z"),
    ("Ribbon", "R R L R L L P Z P P Z P Z P P Z P R R L R L L Z"),
    ("Rocket", "R Z L P R Z R Z L Z R P L Z R Z L Z L P R Z L Z"),
    ("Roofed", "Z L P R Z P L Z P Z R P Z L P R Z P L Z P Z R Z"),
    ("Roofs", "P P R Z L P R P L P L P R P R P L P R Z L P P Z"),
    ("RowHouses", "R P L P R P R P L P L P R P R P L P L P R P L Z"),
    ("Sculpture", "R L P Z Z Z L R L P Z Z P L R L Z Z Z P L R L Z"),
    ("Seal", "L L L P R R R Z L P R Z L L L P R L Z P P Z L Z"),
    ("Seal2", "R P Z L L L R L R R R P R R P L R Z Z L R Z Z Z"),
    ("Sheep", "R L L R R L L R L R R R R R L R L L L L L R L Z"),
    ("Shelter", "L R L R R L R L L R Z Z Z Z P Z Z P Z Z Z Z R Z"),
    ("Ship", "P R L L L L P R R R R L Z L Z R P L Z L Z P P Z"),
    ("Shpongle", "L R Z R L R Z R L R Z R L R Z R L R Z R L R Z Z"),
    ("Slide", "L R L R Z L R L P Z Z P Z Z P R L Z Z R L R L Z"),
    ("SmallShip", "Z L R Z R L Z L R Z L R Z L R Z R L Z L R Z L Z"),
    ("SnakeReadyToStrike", "L Z L Z L Z L R Z R Z R Z L Z Z Z P Z Z Z Z L Z"),
    ("Snakes14", "R R P Z R L R Z Z Z R P L P Z P L P R Z Z L R Z"),
    ("Snakes15", "Z P P Z P P Z P L L P R L Z P L P R Z Z Z P R Z"),
    ("Snakes18", "P P L P L P R Z R P R Z R P L P R Z P P Z Z P Z"),
    ("Snowflake", "L L L R R R R L L L L R R R R L L L L R R R R Z"),
    ("Snowman", "Z P P Z P P Z Z Z P P Z P P Z Z Z P P Z P P Z Z"),
    ("Source", "P R Z P Z L P R P L L R L R R P L L R L R R P Z"),
    ("Spaceship", "P P R R P R L P L P R P R L P L R P R P R P P Z"),
    ("Spaceship2", "P P L P L P R Z P P Z L P R Z P Z L P L L P P Z"),
    ("Speedboat", "L Z Z L P R Z Z L Z Z P Z Z R Z Z L P R Z Z R Z"),
    ("Speedboat2", "P R L L R R R Z L P R Z L L L R R L P Z R P L Z"),
    ("Spider", "R R Z Z L R L P Z L Z P P Z R Z P R L R Z Z L Z"),
    ("Spitzbergen", "P L Z R R L P Z L P R R P L L P R Z P R L L Z Z"),
    ("Square", "Z Z L L P R R Z Z L L P R R Z Z L L P R R Z Z Z"),
    ("SquareHole", "P Z P Z Z P P Z P Z Z P Z Z P Z P P Z Z P Z P Z"),
    ("Stage", "R Z L P L R P R L R P R L P L R L P L R P R Z Z"),
    ("Stairs", "Z P Z P Z P Z P Z P Z P Z P Z P Z P Z P Z P Z Z"),
    ("Stairs2", "Z P Z P Z P P Z Z P Z P Z P Z P Z P P Z Z P Z Z"),
    ("Straight", "Z Z Z Z Z Z Z Z Z Z Z Z Z Z Z Z Z Z Z Z Z Z Z Z"),
    ("Swan", "Z P Z P L L P L P R P R L P L R P R P L P L R Z"),
    ("Swan2", "P Z P R R R L R L L R L R R R P Z Z Z Z Z P P Z"),
    ("Swan3", "P P Z Z Z R Z R Z Z L P R Z Z R P L Z Z R Z R Z"),
    ("Symbol", "R R P Z P P Z P L L R L R R P Z P P Z P L L R Z"),
    ("Symmetry", "R Z L R L Z L R L Z R P L Z R L R Z R L R Z L Z"),
    ("Symmetry2", "Z P L L P Z Z L P R P L L P R R P L L P R P L Z"),
    ("TableFireworks", "Z R L P R R R P L R Z R L P R R R P R L Z R P Z"),
    ("Tapering", "Z Z R L P L Z P P Z L P R Z P P Z R P R L Z Z Z"),
    ("TaperingTurned", "Z Z R L P L Z P P Z L Z R Z P P Z R P R L Z Z Z"),
    ("TeaLightStick", "R Z P P Z L R P L L R R P L L R R P L L R R P Z"),
    ("Tent", "R Z Z R L Z Z R L Z Z L R Z Z R L Z Z R L Z Z Z"),
    ("Terraces", "R L Z R L P L L P L R R R L L L R P R R P R L Z"),
    ("Terrier", "P Z P P Z P Z Z Z P P Z P Z Z P Z P P Z Z Z Z Z"),
    ("Three-Legged", "R Z L R Z L P R Z R Z P Z L Z L P R Z L R Z L Z"),
    ("ThreePeaks", "R Z Z R P L P R P R R P L L P L P R P L Z Z L Z"),
    ("ToTheFront", "Z P R L L L P R L Z P P Z L L P Z L R Z P Z L Z"),
    ("Top", "P L L P L Z Z R L P R R L R L L P R P R R P Z Z"),
    ("Transport", "P Z Z P P Z P P Z P P Z P P Z P P Z Z P Z Z Z Z"),
    ("Triangle", "Z Z Z Z Z Z R L Z Z Z Z Z Z R L Z Z Z Z Z Z R Z"),
    ("Tripple", "P Z P L P R P R P Z P L P R P Z P L P L P R P Z"),
    ("Turtle", "R R R L R L L L P L L R L R R P L R Z Z L R Z Z"),
    ("Twins", "Z P Z L P L R P R P Z Z P L P L R P R Z P Z Z Z"),
    ("TwoSlants", "Z P Z Z P P Z P Z R P R L P L P R P L Z Z R P Z"),
    ("TwoWings", "P L Z R Z P P Z P P Z P P Z L Z R P L Z R L Z Z"),
    ("UFO", "L L R L R R L R L L L P L L L R L R R L R L L Z"),
    ("USSEnterprice", "L P R P R L Z P P Z R L Z P P Z R L P L P R Z Z"),
    ("UpAndDown", "Z P Z P Z P L P R P Z P Z P Z P Z P L P R P Z Z"),
    ("Upright", "Z R R L R L L P Z Z L P R Z Z P R R L R L L Z Z"),
    ("Upside-down", "P Z Z Z P P Z R R L L P R R L L Z P P Z Z Z P Z"),
    ("Valley", "Z R P L P R P R L R Z P Z L R L P L P R P L Z Z"),
    ("Viaduct", "P R P L P Z Z P R Z R R Z R P Z Z P L P R P Z Z"),
    ("View", "Z R P L P R Z Z R P L L R R P L Z Z L P R P L Z"),
    ("Waterfall", "L Z R P L Z R P L Z R P L Z R P L Z R P L Z R Z"),
    ("WindWheel", "P R R P Z L P R R P Z L P R R P Z L P R R P Z Z"),
    ("Window", "P Z P P Z Z P Z P Z P Z Z P Z P Z P P Z Z Z Z Z"),
    ("WindowToTheWorld", "P L Z P Z Z P Z Z P Z R P L Z P Z Z P Z Z P Z Z"),
    ("Windshield", "P P Z R P L L P R Z P Z L P R R P L Z P P Z P Z"),
    ("WingNut", "Z Z Z Z P R R R P R L P L R P R R R P Z Z Z Z Z"),
    ("Wings2", "R Z P Z L P R P R L R R L L R L P L P R Z P Z Z"),
    ("WithoutName", "P R P R R P L L P Z P R P L P Z P R R P L L P Z"),
    ("Wolf", "Z Z P P Z P Z Z P Z P P Z P Z Z Z P P Z Z Z P Z"),
    ("X", "L Z Z P L R R P L R Z P P Z L R P L L R P Z Z Z"),
];
