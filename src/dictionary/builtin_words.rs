/// Candidate words handed out by `random_word`.
pub const COMMON_WORDS: &[&str] = &[
    "HELLO", "WORLD", "GAME", "PLAY", "WORD", "TILE", "SCORE", "POINT", "LETTER", "BOARD",
    "START", "END", "WIN", "LOSE", "DRAW", "PASS", "QUIT", "HELP", "RULES", "TURN", "NEXT",
    "LAST", "FIRST", "BEST", "GOOD", "BAD", "BIG", "SMALL", "LONG", "SHORT", "HIGH", "LOW",
    "FAST", "SLOW", "HOT", "COLD", "WARM", "COOL", "NEW", "OLD", "YOUNG", "RICH", "POOR",
    "HAPPY", "SAD", "ANGRY", "CALM", "QUIET", "LOUD", "SOFT", "HARD", "EASY", "SIMPLE",
    "CLEAR", "FOGGY", "BRIGHT", "DARK", "LIGHT", "HEAVY", "STRONG", "WEAK", "SICK", "ALIVE",
    "DEAD", "OPEN", "CLOSE", "BEGIN", "FINISH", "STOP", "GO", "COME", "LEAVE", "ARRIVE",
    "ENTER", "EXIT", "UP", "DOWN", "IN", "OUT", "ON", "OFF", "YES", "NO", "MAYBE", "ALWAYS",
    "NEVER", "OFTEN", "SOON", "LATE", "EARLY", "NOW", "THEN", "BEFORE", "AFTER", "DURING",
    "WHILE", "UNTIL", "SINCE", "MUSIC", "SONG", "MELODY", "RHYTHM", "BEAT", "TUNE", "VOICE",
    "SOUND", "NOISE", "ECHO", "SHOUT", "LAUGH", "CRY", "SMILE", "FROWN", "GRIN", "WINK",
    "BLINK", "STARE", "GLANCE", "PEEK", "PEEP", "GAZE", "WATCH", "NOTICE", "SEE", "SPOT",
    "FIND", "SEARCH", "LOOK", "HUNT", "CHASE", "FOLLOW", "LEAD", "GUIDE", "DIRECT", "SHOW",
    "TELL", "SAY", "SPEAK", "TALK", "CHAT", "ARGUE", "DEBATE", "AGREE", "ACCEPT", "REJECT",
    "DENY", "ALLOW", "FORBID", "PERMIT", "REFUSE", "GRANT", "GIVE", "TAKE", "GET", "OBTAIN",
    "BUY", "SELL", "TRADE", "SWAP", "SHARE", "DIVIDE", "SPLIT", "BREAK", "CUT", "SLICE",
    "CHOP", "DICE", "GRIND", "CRUSH", "SMASH", "CRACK", "SNAP", "BEND", "FOLD", "WRAP",
    "COVER", "REVEAL", "HIDE", "SECRET", "PUBLIC", "CLOSED", "LOCKED", "SAFE", "RISKY",
    "BOLD", "BRAVE", "SCARED", "AFRAID", "ANXIOUS", "CARE", "LOVE", "LIKE", "HATE", "ENJOY",
    "PREFER", "CHOOSE", "SELECT", "PICK", "DECIDE", "RESOLVE", "SOLVE", "ANSWER", "ASK",
    "WONDER", "CURIOUS", "BORED", "EXCITED", "AMAZED", "SHOCKED", "STUNNED", "PUZZLED",
    "STUCK", "FREE", "FLED", "RAN", "WALKED", "FLEW", "DROVE", "RODE", "TOOK", "SENT",
    "MAILED", "POSTED", "MOVED", "CHANGED", "FIXED", "MENDED", "HEALED", "CURED", "DRUG",
    "PILL", "TABLET", "LIQUID", "SOLID", "GAS", "VAPOR", "SMOKE", "STEAM", "WATER", "ICE",
    "SNOW", "RAIN", "SUN", "MOON", "STAR", "PLANET", "EARTH", "SPACE", "TIME", "DAY",
    "NIGHT", "MORNING", "EVENING", "NOON", "DAWN", "DUSK", "SUNRISE", "SUNSET", "SHADOW",
    "FOG", "MIST", "CLOUD", "SKY", "AIR", "WIND", "BREEZE", "STORM", "THUNDER", "RAINBOW",
    "COLOR", "RED", "BLUE", "GREEN", "YELLOW", "ORANGE", "PURPLE", "PINK", "BROWN", "BLACK",
    "WHITE", "GRAY", "SILVER", "GOLD", "BRONZE", "COPPER", "IRON", "STEEL", "WOOD",
    "STONE", "GLASS", "PAPER", "CLOTH", "FABRIC", "COTTON", "SILK", "WOOL", "LEATHER",
    "RUBBER", "METAL", "CARBON", "OXYGEN", "HELIUM", "NEON", "ARGON", "XENON", "RADON",
    "RADIUM", "CESIUM", "BARIUM", "CURIUM",
];

/// Short function words used to soak up leftover tiles, in priority order.
pub const CONNECTOR_WORDS: &[&str] = &[
    "AT", "IT", "IN", "ON", "TO", "GO", "DO", "BE", "HE", "SHE", "THE", "AND", "FOR", "BUT",
    "NOT", "HAS", "HAD", "WAS", "ARE", "WERE",
];

/// Two-letter words accepted for incidental cross-words.
pub const TWO_LETTER_WORDS: &[&str] = &[
    "AA", "AB", "AD", "AE", "AG", "AH", "AI", "AL", "AM", "AN", "AR", "AS", "AT", "AW", "AX",
    "AY", "BA", "BE", "BI", "BO", "BY", "DA", "DE", "DO", "ED", "EF", "EH", "EL", "EM", "EN",
    "ER", "ES", "EX", "FA", "FE", "GO", "HA", "HE", "HI", "HM", "HO", "ID", "IF", "IN", "IS",
    "IT", "JO", "KA", "KI", "LA", "LI", "LO", "MA", "ME", "MI", "MM", "MO", "MU", "MY", "NA",
    "NE", "NO", "NU", "OD", "OE", "OF", "OH", "OI", "OM", "ON", "OP", "OR", "OS", "OW", "OX",
    "OY", "PA", "PE", "PI", "QI", "RE", "SH", "SI", "SO", "TA", "TI", "TO", "UH", "UM", "UN",
    "UP", "US", "UT", "WE", "WO", "XI", "XU", "YA", "YE", "YO", "ZA",
];
