//! Named ZMK keycodes.
//!
//! Discriminants are ZMK's encoded HID usage (`page << 16 | id`), so a
//! [`Keycode`] converts to and from the `param1`/`param2` value of a key
//! press binding without a lookup table.
//!
//! Covers the keyboard, generic desktop and consumer pages as named in
//! ZMK's `dt-bindings/zmk/keys.h`.

use num_enum::{IntoPrimitive, TryFromPrimitive};
use strum_macros::{EnumIter, EnumString, IntoStaticStr};

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    EnumIter,
    EnumString,
    IntoStaticStr,
    IntoPrimitive,
    TryFromPrimitive,
)]
#[repr(u32)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE", ascii_case_insensitive)]
pub enum Keycode {
    // Keyboard page
    A = 0x00070004,
    B = 0x00070005,
    C = 0x00070006,
    D = 0x00070007,
    E = 0x00070008,
    F = 0x00070009,
    G = 0x0007000A,
    H = 0x0007000B,
    I = 0x0007000C,
    J = 0x0007000D,
    K = 0x0007000E,
    L = 0x0007000F,
    M = 0x00070010,
    N = 0x00070011,
    O = 0x00070012,
    P = 0x00070013,
    Q = 0x00070014,
    R = 0x00070015,
    S = 0x00070016,
    T = 0x00070017,
    U = 0x00070018,
    V = 0x00070019,
    W = 0x0007001A,
    X = 0x0007001B,
    Y = 0x0007001C,
    Z = 0x0007001D,
    #[strum(to_string = "N1", serialize = "NUMBER_1")]
    N1 = 0x0007001E,
    #[strum(to_string = "N2", serialize = "NUMBER_2")]
    N2 = 0x0007001F,
    #[strum(to_string = "N3", serialize = "NUMBER_3")]
    N3 = 0x00070020,
    #[strum(to_string = "N4", serialize = "NUMBER_4")]
    N4 = 0x00070021,
    #[strum(to_string = "N5", serialize = "NUMBER_5")]
    N5 = 0x00070022,
    #[strum(to_string = "N6", serialize = "NUMBER_6")]
    N6 = 0x00070023,
    #[strum(to_string = "N7", serialize = "NUMBER_7")]
    N7 = 0x00070024,
    #[strum(to_string = "N8", serialize = "NUMBER_8")]
    N8 = 0x00070025,
    #[strum(to_string = "N9", serialize = "NUMBER_9")]
    N9 = 0x00070026,
    #[strum(to_string = "N0", serialize = "NUMBER_0")]
    N0 = 0x00070027,
    #[strum(to_string = "ENTER", serialize = "RET", serialize = "RETURN")]
    Enter = 0x00070028,
    #[strum(to_string = "ESCAPE", serialize = "ESC")]
    Escape = 0x00070029,
    #[strum(to_string = "BACKSPACE", serialize = "BSPC")]
    Backspace = 0x0007002A,
    Tab = 0x0007002B,
    #[strum(to_string = "SPACE", serialize = "SPC")]
    Space = 0x0007002C,
    Minus = 0x0007002D,
    Equal = 0x0007002E,
    #[strum(to_string = "LEFT_BRACKET", serialize = "LBKT")]
    LeftBracket = 0x0007002F,
    #[strum(to_string = "RIGHT_BRACKET", serialize = "RBKT")]
    RightBracket = 0x00070030,
    #[strum(to_string = "BACKSLASH", serialize = "BSLH")]
    Backslash = 0x00070031,
    #[strum(to_string = "NON_US_HASH", serialize = "NUHS")]
    NonUsHash = 0x00070032,
    #[strum(to_string = "SEMICOLON", serialize = "SEMI")]
    Semicolon = 0x00070033,
    #[strum(to_string = "SINGLE_QUOTE", serialize = "SQT", serialize = "APOS", serialize = "APOSTROPHE")]
    SingleQuote = 0x00070034,
    Grave = 0x00070035,
    Comma = 0x00070036,
    #[strum(to_string = "PERIOD", serialize = "DOT")]
    Period = 0x00070037,
    #[strum(to_string = "SLASH", serialize = "FSLH")]
    Slash = 0x00070038,
    #[strum(to_string = "CAPSLOCK", serialize = "CAPS", serialize = "CLCK")]
    CapsLock = 0x00070039,
    #[strum(to_string = "F1")]
    F1 = 0x0007003A,
    #[strum(to_string = "F2")]
    F2 = 0x0007003B,
    #[strum(to_string = "F3")]
    F3 = 0x0007003C,
    #[strum(to_string = "F4")]
    F4 = 0x0007003D,
    #[strum(to_string = "F5")]
    F5 = 0x0007003E,
    #[strum(to_string = "F6")]
    F6 = 0x0007003F,
    #[strum(to_string = "F7")]
    F7 = 0x00070040,
    #[strum(to_string = "F8")]
    F8 = 0x00070041,
    #[strum(to_string = "F9")]
    F9 = 0x00070042,
    #[strum(to_string = "F10")]
    F10 = 0x00070043,
    #[strum(to_string = "F11")]
    F11 = 0x00070044,
    #[strum(to_string = "F12")]
    F12 = 0x00070045,
    #[strum(to_string = "PRINTSCREEN", serialize = "PSCRN")]
    PrintScreen = 0x00070046,
    #[strum(to_string = "SCROLLLOCK", serialize = "SLCK")]
    ScrollLock = 0x00070047,
    PauseBreak = 0x00070048,
    #[strum(to_string = "INSERT", serialize = "INS")]
    Insert = 0x00070049,
    Home = 0x0007004A,
    #[strum(to_string = "PAGE_UP", serialize = "PG_UP")]
    PageUp = 0x0007004B,
    #[strum(to_string = "DELETE", serialize = "DEL")]
    Delete = 0x0007004C,
    End = 0x0007004D,
    #[strum(to_string = "PAGE_DOWN", serialize = "PG_DN")]
    PageDown = 0x0007004E,
    #[strum(to_string = "RIGHT_ARROW", serialize = "RIGHT")]
    RightArrow = 0x0007004F,
    #[strum(to_string = "LEFT_ARROW", serialize = "LEFT")]
    LeftArrow = 0x00070050,
    #[strum(to_string = "DOWN_ARROW", serialize = "DOWN")]
    DownArrow = 0x00070051,
    #[strum(to_string = "UP_ARROW", serialize = "UP")]
    UpArrow = 0x00070052,
    #[strum(to_string = "KP_NUMLOCK", serialize = "KP_NUM", serialize = "KP_NLCK")]
    KpNumlock = 0x00070053,
    #[strum(to_string = "KP_SLASH", serialize = "KP_DIVIDE")]
    KpSlash = 0x00070054,
    #[strum(to_string = "KP_ASTERISK", serialize = "KP_MULTIPLY")]
    KpAsterisk = 0x00070055,
    #[strum(to_string = "KP_MINUS", serialize = "KP_SUBTRACT")]
    KpMinus = 0x00070056,
    KpPlus = 0x00070057,
    KpEnter = 0x00070058,
    #[strum(to_string = "KP_N1", serialize = "KP_NUMBER_1")]
    KpN1 = 0x00070059,
    #[strum(to_string = "KP_N2", serialize = "KP_NUMBER_2")]
    KpN2 = 0x0007005A,
    #[strum(to_string = "KP_N3", serialize = "KP_NUMBER_3")]
    KpN3 = 0x0007005B,
    #[strum(to_string = "KP_N4", serialize = "KP_NUMBER_4")]
    KpN4 = 0x0007005C,
    #[strum(to_string = "KP_N5", serialize = "KP_NUMBER_5")]
    KpN5 = 0x0007005D,
    #[strum(to_string = "KP_N6", serialize = "KP_NUMBER_6")]
    KpN6 = 0x0007005E,
    #[strum(to_string = "KP_N7", serialize = "KP_NUMBER_7")]
    KpN7 = 0x0007005F,
    #[strum(to_string = "KP_N8", serialize = "KP_NUMBER_8")]
    KpN8 = 0x00070060,
    #[strum(to_string = "KP_N9", serialize = "KP_NUMBER_9")]
    KpN9 = 0x00070061,
    #[strum(to_string = "KP_N0", serialize = "KP_NUMBER_0")]
    KpN0 = 0x00070062,
    KpDot = 0x00070063,
    #[strum(to_string = "NON_US_BACKSLASH", serialize = "NON_US_BSLH", serialize = "NUBS")]
    NonUsBackslash = 0x00070064,
    #[strum(to_string = "K_APPLICATION", serialize = "K_APP", serialize = "K_CONTEXT_MENU", serialize = "K_CMENU")]
    KApplication = 0x00070065,
    #[strum(to_string = "K_POWER", serialize = "K_PWR")]
    KPower = 0x00070066,
    KpEqual = 0x00070067,
    #[strum(to_string = "F13")]
    F13 = 0x00070068,
    #[strum(to_string = "F14")]
    F14 = 0x00070069,
    #[strum(to_string = "F15")]
    F15 = 0x0007006A,
    #[strum(to_string = "F16")]
    F16 = 0x0007006B,
    #[strum(to_string = "F17")]
    F17 = 0x0007006C,
    #[strum(to_string = "F18")]
    F18 = 0x0007006D,
    #[strum(to_string = "F19")]
    F19 = 0x0007006E,
    #[strum(to_string = "F20")]
    F20 = 0x0007006F,
    #[strum(to_string = "F21")]
    F21 = 0x00070070,
    #[strum(to_string = "F22")]
    F22 = 0x00070071,
    #[strum(to_string = "F23")]
    F23 = 0x00070072,
    #[strum(to_string = "F24")]
    F24 = 0x00070073,
    #[strum(to_string = "K_EXECUTE", serialize = "K_EXEC")]
    KExecute = 0x00070074,
    KHelp = 0x00070075,
    KMenu = 0x00070076,
    KSelect = 0x00070077,
    KStop = 0x00070078,
    #[strum(to_string = "K_AGAIN", serialize = "K_REDO")]
    KAgain = 0x00070079,
    KUndo = 0x0007007A,
    KCut = 0x0007007B,
    KCopy = 0x0007007C,
    KPaste = 0x0007007D,
    KFind = 0x0007007E,
    KMute = 0x0007007F,
    #[strum(to_string = "K_VOLUME_UP", serialize = "K_VOL_UP")]
    KVolumeUp = 0x00070080,
    #[strum(to_string = "K_VOLUME_DOWN", serialize = "K_VOL_DN")]
    KVolumeDown = 0x00070081,
    #[strum(to_string = "LOCKING_CAPS", serialize = "LCAPS")]
    LockingCaps = 0x00070082,
    #[strum(to_string = "LOCKING_NUM", serialize = "LNLCK")]
    LockingNum = 0x00070083,
    #[strum(to_string = "LOCKING_SCROLL", serialize = "LSLCK")]
    LockingScroll = 0x00070084,
    KpComma = 0x00070085,
    #[strum(to_string = "KP_EQUAL_AS400")]
    KpEqualAs400 = 0x00070086,
    #[strum(to_string = "INTERNATIONAL_1", serialize = "INT1", serialize = "INT_RO")]
    International1 = 0x00070087,
    #[strum(to_string = "INTERNATIONAL_2", serialize = "INT2", serialize = "INT_KATAKANAHIRAGANA")]
    International2 = 0x00070088,
    #[strum(to_string = "INTERNATIONAL_3", serialize = "INT3", serialize = "INT_YEN")]
    International3 = 0x00070089,
    #[strum(to_string = "INTERNATIONAL_4", serialize = "INT4", serialize = "INT_HENKAN")]
    International4 = 0x0007008A,
    #[strum(to_string = "INTERNATIONAL_5", serialize = "INT5", serialize = "INT_MUHENKAN")]
    International5 = 0x0007008B,
    #[strum(to_string = "INTERNATIONAL_6", serialize = "INT6", serialize = "INT_KPJPCOMMA")]
    International6 = 0x0007008C,
    #[strum(to_string = "INTERNATIONAL_7", serialize = "INT7")]
    International7 = 0x0007008D,
    #[strum(to_string = "INTERNATIONAL_8", serialize = "INT8")]
    International8 = 0x0007008E,
    #[strum(to_string = "INTERNATIONAL_9", serialize = "INT9")]
    International9 = 0x0007008F,
    #[strum(to_string = "LANGUAGE_1", serialize = "LANG1", serialize = "LANG_HANGEUL")]
    Language1 = 0x00070090,
    #[strum(to_string = "LANGUAGE_2", serialize = "LANG2", serialize = "LANG_HANJA")]
    Language2 = 0x00070091,
    #[strum(to_string = "LANGUAGE_3", serialize = "LANG3", serialize = "LANG_KATAKANA")]
    Language3 = 0x00070092,
    #[strum(to_string = "LANGUAGE_4", serialize = "LANG4", serialize = "LANG_HIRAGANA")]
    Language4 = 0x00070093,
    #[strum(to_string = "LANGUAGE_5", serialize = "LANG5", serialize = "LANG_ZENKAKUHANKAKU")]
    Language5 = 0x00070094,
    #[strum(to_string = "LANGUAGE_6", serialize = "LANG6")]
    Language6 = 0x00070095,
    #[strum(to_string = "LANGUAGE_7", serialize = "LANG7")]
    Language7 = 0x00070096,
    #[strum(to_string = "LANGUAGE_8", serialize = "LANG8")]
    Language8 = 0x00070097,
    #[strum(to_string = "LANGUAGE_9", serialize = "LANG9")]
    Language9 = 0x00070098,
    AltErase = 0x00070099,
    #[strum(to_string = "SYSREQ", serialize = "ATTENTION")]
    Sysreq = 0x0007009A,
    KCancel = 0x0007009B,
    Clear = 0x0007009C,
    Prior = 0x0007009D,
    #[strum(to_string = "RETURN2", serialize = "RET2")]
    Return2 = 0x0007009E,
    Separator = 0x0007009F,
    Out = 0x000700A0,
    Oper = 0x000700A1,
    #[strum(to_string = "CLEAR_AGAIN", serialize = "CLEAR2")]
    ClearAgain = 0x000700A2,
    Crsel = 0x000700A3,
    Exsel = 0x000700A4,
    #[strum(to_string = "KP_LEFT_PARENTHESIS", serialize = "KP_LPAR")]
    KpLeftParenthesis = 0x000700B6,
    #[strum(to_string = "KP_RIGHT_PARENTHESIS", serialize = "KP_RPAR")]
    KpRightParenthesis = 0x000700B7,
    KpClear = 0x000700D8,
    #[strum(to_string = "LEFT_CONTROL", serialize = "LCTRL", serialize = "LCTL")]
    LeftControl = 0x000700E0,
    #[strum(to_string = "LEFT_SHIFT", serialize = "LSHFT", serialize = "LSHIFT")]
    LeftShift = 0x000700E1,
    #[strum(to_string = "LEFT_ALT", serialize = "LALT")]
    LeftAlt = 0x000700E2,
    #[strum(to_string = "LEFT_GUI", serialize = "LGUI", serialize = "LCMD", serialize = "LWIN")]
    LeftGui = 0x000700E3,
    #[strum(to_string = "RIGHT_CONTROL", serialize = "RCTRL", serialize = "RCTL")]
    RightControl = 0x000700E4,
    #[strum(to_string = "RIGHT_SHIFT", serialize = "RSHFT", serialize = "RSHIFT")]
    RightShift = 0x000700E5,
    #[strum(to_string = "RIGHT_ALT", serialize = "RALT")]
    RightAlt = 0x000700E6,
    #[strum(to_string = "RIGHT_GUI", serialize = "RGUI", serialize = "RCMD", serialize = "RWIN")]
    RightGui = 0x000700E7,
    #[strum(to_string = "K_PLAY_PAUSE", serialize = "K_PP")]
    KPlayPause = 0x000700E8,
    #[strum(to_string = "K_STOP2")]
    KStop2 = 0x000700E9,
    #[strum(to_string = "K_PREVIOUS", serialize = "K_PREV")]
    KPrevious = 0x000700EA,
    KNext = 0x000700EB,
    KEject = 0x000700EC,
    #[strum(to_string = "K_VOLUME_UP2", serialize = "K_VOL_UP2")]
    KVolumeUp2 = 0x000700ED,
    #[strum(to_string = "K_VOLUME_DOWN2", serialize = "K_VOL_DN2")]
    KVolumeDown2 = 0x000700EE,
    #[strum(to_string = "K_MUTE2")]
    KMute2 = 0x000700EF,
    KWww = 0x000700F0,
    KBack = 0x000700F1,
    KForward = 0x000700F2,
    #[strum(to_string = "K_STOP3")]
    KStop3 = 0x000700F3,
    #[strum(to_string = "K_FIND2")]
    KFind2 = 0x000700F4,
    KScrollUp = 0x000700F5,
    KScrollDown = 0x000700F6,
    KEdit = 0x000700F7,
    KSleep = 0x000700F8,
    #[strum(to_string = "K_LOCK", serialize = "K_SCREENSAVER", serialize = "K_COFFEE")]
    KLock = 0x000700F9,
    KRefresh = 0x000700FA,
    #[strum(to_string = "K_CALCULATOR", serialize = "K_CALC")]
    KCalculator = 0x000700FB,

    // Generic desktop page
    #[strum(to_string = "SYSTEM_POWER", serialize = "SYS_PWR")]
    SystemPower = 0x00010081,
    #[strum(to_string = "SYSTEM_SLEEP", serialize = "SYS_SLEEP")]
    SystemSleep = 0x00010082,
    #[strum(to_string = "SYSTEM_WAKE_UP", serialize = "SYS_WAKE")]
    SystemWakeUp = 0x00010083,

    // Consumer page
    #[strum(to_string = "C_POWER", serialize = "C_PWR")]
    CPower = 0x000C0030,
    CReset = 0x000C0031,
    CSleep = 0x000C0032,
    CSleepMode = 0x000C0034,
    CMenu = 0x000C0040,
    #[strum(to_string = "C_MENU_PICK", serialize = "C_MENU_SELECT")]
    CMenuPick = 0x000C0041,
    CMenuUp = 0x000C0042,
    CMenuDown = 0x000C0043,
    CMenuLeft = 0x000C0044,
    CMenuRight = 0x000C0045,
    #[strum(to_string = "C_MENU_ESCAPE", serialize = "C_MENU_ESC")]
    CMenuEscape = 0x000C0046,
    #[strum(to_string = "C_MENU_INCREASE", serialize = "C_MENU_INC")]
    CMenuIncrease = 0x000C0047,
    #[strum(to_string = "C_MENU_DECREASE", serialize = "C_MENU_DEC")]
    CMenuDecrease = 0x000C0048,
    CDataOnScreen = 0x000C0060,
    #[strum(to_string = "C_CAPTIONS", serialize = "C_SUBTITLES")]
    CCaptions = 0x000C0061,
    CSnapshot = 0x000C0065,
    #[strum(to_string = "C_PICTURE_IN_PICTURE", serialize = "C_PIP")]
    CPictureInPicture = 0x000C0067,
    #[strum(to_string = "C_BRIGHTNESS_INC", serialize = "C_BRI_UP", serialize = "C_BRI_INC")]
    CBrightnessInc = 0x000C006F,
    #[strum(to_string = "C_BRIGHTNESS_DEC", serialize = "C_BRI_DN", serialize = "C_BRI_DEC")]
    CBrightnessDec = 0x000C0070,
    #[strum(to_string = "C_BACKLIGHT_TOGGLE", serialize = "C_BKLT_TOG")]
    CBacklightToggle = 0x000C0072,
    #[strum(to_string = "C_BRIGHTNESS_MINIMUM", serialize = "C_BRI_MIN")]
    CBrightnessMinimum = 0x000C0073,
    #[strum(to_string = "C_BRIGHTNESS_MAXIMUM", serialize = "C_BRI_MAX")]
    CBrightnessMaximum = 0x000C0074,
    #[strum(to_string = "C_BRIGHTNESS_AUTO", serialize = "C_BRI_AUTO")]
    CBrightnessAuto = 0x000C0075,
    CModeStep = 0x000C0082,
    #[strum(to_string = "C_RECALL_LAST", serialize = "C_CHAN_LAST")]
    CRecallLast = 0x000C0083,
    CMediaComputer = 0x000C0088,
    CMediaTv = 0x000C0089,
    CMediaWww = 0x000C008A,
    CMediaGuide = 0x000C008D,
    CMediaVideophone = 0x000C008E,
    CMediaGames = 0x000C008F,
    CMediaMessages = 0x000C0090,
    CMediaCd = 0x000C0091,
    CMediaVcr = 0x000C0092,
    CMediaTuner = 0x000C0093,
    CQuit = 0x000C0094,
    CHelp = 0x000C0095,
    CMediaTape = 0x000C0096,
    CMediaCable = 0x000C0097,
    CMediaSatellite = 0x000C0098,
    CMediaHome = 0x000C009A,
    #[strum(to_string = "C_CHANNEL_INC", serialize = "C_CHAN_INC")]
    CChannelInc = 0x000C009C,
    #[strum(to_string = "C_CHANNEL_DEC", serialize = "C_CHAN_DEC")]
    CChannelDec = 0x000C009D,
    CMediaVcrPlus = 0x000C00A0,
    CPlay = 0x000C00B0,
    CPause = 0x000C00B1,
    #[strum(to_string = "C_RECORD", serialize = "C_REC")]
    CRecord = 0x000C00B2,
    #[strum(to_string = "C_FAST_FORWARD", serialize = "C_FF")]
    CFastForward = 0x000C00B3,
    #[strum(to_string = "C_REWIND", serialize = "C_RW")]
    CRewind = 0x000C00B4,
    CNext = 0x000C00B5,
    #[strum(to_string = "C_PREVIOUS", serialize = "C_PREV")]
    CPrevious = 0x000C00B6,
    CStop = 0x000C00B7,
    CEject = 0x000C00B8,
    #[strum(to_string = "C_RANDOM_PLAY", serialize = "C_SHUFFLE")]
    CRandomPlay = 0x000C00B9,
    CRepeat = 0x000C00BC,
    CStopEject = 0x000C00CC,
    #[strum(to_string = "C_PLAY_PAUSE", serialize = "C_PP")]
    CPlayPause = 0x000C00CD,
    CVoiceCommand = 0x000C00CF,
    CMute = 0x000C00E2,
    CBassBoost = 0x000C00E5,
    #[strum(to_string = "C_VOLUME_UP", serialize = "C_VOL_UP")]
    CVolumeUp = 0x000C00E9,
    #[strum(to_string = "C_VOLUME_DOWN", serialize = "C_VOL_DN")]
    CVolumeDown = 0x000C00EA,
    CSlow = 0x000C00F5,
    #[strum(to_string = "C_AL_CONSUMER_CONTROL_CONFIGURATION", serialize = "C_AL_CCC")]
    CAlConsumerControlConfiguration = 0x000C0183,
    CAlWord = 0x000C0184,
    CAlTextEditor = 0x000C0185,
    #[strum(to_string = "C_AL_SPREADSHEET", serialize = "C_AL_SHEET")]
    CAlSpreadsheet = 0x000C0186,
    CAlGraphicsEditor = 0x000C0187,
    CAlPresentation = 0x000C0188,
    #[strum(to_string = "C_AL_DATABASE", serialize = "C_AL_DB")]
    CAlDatabase = 0x000C0189,
    #[strum(to_string = "C_AL_EMAIL", serialize = "C_AL_MAIL")]
    CAlEmail = 0x000C018A,
    CAlNews = 0x000C018B,
    CAlVoicemail = 0x000C018C,
    CAlContacts = 0x000C018D,
    #[strum(to_string = "C_AL_CALENDAR", serialize = "C_AL_CAL")]
    CAlCalendar = 0x000C018E,
    CAlTaskManager = 0x000C018F,
    CAlJournal = 0x000C0190,
    CAlFinance = 0x000C0191,
    #[strum(to_string = "C_AL_CALCULATOR", serialize = "C_AL_CALC")]
    CAlCalculator = 0x000C0192,
    CAlAvCapturePlayback = 0x000C0193,
    CAlMyComputer = 0x000C0194,
    CAlWww = 0x000C0196,
    CAlChat = 0x000C0199,
    CAlLogoff = 0x000C019C,
    #[strum(to_string = "C_AL_LOCK", serialize = "C_AL_SCREENSAVER")]
    CAlLock = 0x000C019E,
    CAlControlPanel = 0x000C019F,
    CAlSelectTask = 0x000C01A2,
    CAlNextTask = 0x000C01A3,
    #[strum(to_string = "C_AL_PREVIOUS_TASK", serialize = "C_AL_PREV_TASK")]
    CAlPreviousTask = 0x000C01A4,
    CAlHelp = 0x000C01A6,
    #[strum(to_string = "C_AL_DOCUMENTS", serialize = "C_AL_DOCS")]
    CAlDocuments = 0x000C01A7,
    #[strum(to_string = "C_AL_SPELLCHECK", serialize = "C_AL_SPELL")]
    CAlSpellcheck = 0x000C01AB,
    CAlKeyboardLayout = 0x000C01AE,
    CAlScreenSaver = 0x000C01B1,
    #[strum(to_string = "C_AL_FILE_BROWSER", serialize = "C_AL_FILES")]
    CAlFileBrowser = 0x000C01B4,
    #[strum(to_string = "C_AL_IMAGE_BROWSER", serialize = "C_AL_IMAGES")]
    CAlImageBrowser = 0x000C01B6,
    #[strum(to_string = "C_AL_AUDIO_BROWSER", serialize = "C_AL_AUDIO", serialize = "C_AL_MUSIC")]
    CAlAudioBrowser = 0x000C01B7,
    #[strum(to_string = "C_AL_MOVIE_BROWSER", serialize = "C_AL_MOVIES")]
    CAlMovieBrowser = 0x000C01B8,
    CAcNew = 0x000C0201,
    CAcOpen = 0x000C0202,
    CAcClose = 0x000C0203,
    CAcExit = 0x000C0204,
    CAcSave = 0x000C0207,
    CAcPrint = 0x000C0208,
    #[strum(to_string = "C_AC_PROPERTIES", serialize = "C_AC_PROPS")]
    CAcProperties = 0x000C0209,
    CAcUndo = 0x000C021A,
    CAcCopy = 0x000C021B,
    CAcCut = 0x000C021C,
    CAcPaste = 0x000C021D,
    CAcFind = 0x000C021F,
    CAcSearch = 0x000C0221,
    CAcGoto = 0x000C0222,
    CAcHome = 0x000C0223,
    CAcBack = 0x000C0224,
    CAcForward = 0x000C0225,
    CAcStop = 0x000C0226,
    CAcRefresh = 0x000C0227,
    #[strum(to_string = "C_AC_BOOKMARKS", serialize = "C_AC_FAVORITES")]
    CAcBookmarks = 0x000C022A,
    CAcZoomIn = 0x000C022D,
    CAcZoomOut = 0x000C022E,
    CAcZoom = 0x000C022F,
    CAcViewToggle = 0x000C0232,
    CAcScrollUp = 0x000C0233,
    CAcScrollDown = 0x000C0234,
    CAcRedo = 0x000C0279,
    CAcReply = 0x000C0289,
    CAcForwardMail = 0x000C028B,
    CAcSend = 0x000C028C,
    CAcNextKeyboardLayoutSelect = 0x000C029D,
}

impl Keycode {
    pub fn to_hid_usage(self) -> u32 {
        self.into()
    }

    /// Looks up the keycode for an encoded usage; implicit modifiers never match.
    pub fn from_hid_usage(encoded: u32) -> Option<Self> {
        Self::try_from(encoded).ok()
    }

    /// Canonical ZMK name, for example `"A"` or `"LEFT_SHIFT"`.
    pub fn to_name(self) -> &'static str {
        self.into()
    }

    /// Parses a ZMK name or one of its common aliases (`"ESC"`, `"BSPC"`, ...).
    pub fn from_name(name: &str) -> Option<Self> {
        name.trim().parse().ok()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use strum::IntoEnumIterator;

    use super::Keycode;

    #[test]
    fn letters_sit_on_the_keyboard_page() {
        assert_eq!(Keycode::A.to_hid_usage(), 0x0007_0004);
        assert_eq!(Keycode::Z.to_hid_usage(), 0x0007_001D);
        assert_eq!(Keycode::from_hid_usage(0x0007_0005), Some(Keycode::B));
    }

    #[test]
    fn consumer_keys_sit_on_the_consumer_page() {
        assert_eq!(Keycode::CVolumeUp.to_hid_usage(), 0x000C_00E9);
        assert_eq!(Keycode::from_name("C_VOL_UP"), Some(Keycode::CVolumeUp));
    }

    #[test]
    fn names_and_aliases_parse() {
        assert_eq!(Keycode::Escape.to_name(), "ESCAPE");
        assert_eq!(Keycode::from_name("esc"), Some(Keycode::Escape));
        assert_eq!(Keycode::from_name("N1"), Some(Keycode::N1));
        assert_eq!(Keycode::from_name("NUMBER_1"), Some(Keycode::N1));
        assert_eq!(Keycode::from_name("LEFT_SHIFT"), Some(Keycode::LeftShift));
        assert_eq!(Keycode::from_name("not a key"), None);
    }

    #[test]
    fn extended_keyboard_page() {
        assert_eq!(Keycode::NonUsHash.to_hid_usage(), 0x0007_0032);
        assert_eq!(Keycode::from_name("NUHS"), Some(Keycode::NonUsHash));
        assert_eq!(Keycode::from_name("NUBS"), Some(Keycode::NonUsBackslash));
        assert_eq!(Keycode::from_hid_usage(0x0007_0073), Some(Keycode::F24));
        assert_eq!(Keycode::F24.to_name(), "F24");
        assert_eq!(Keycode::from_name("INT_YEN"), Some(Keycode::International3));
        assert_eq!(Keycode::from_name("LANG1"), Some(Keycode::Language1));
        assert_eq!(Keycode::KpLeftParenthesis.to_hid_usage(), 0x0007_00B6);
    }

    #[test]
    fn generic_desktop_keys() {
        assert_eq!(Keycode::SystemPower.to_hid_usage(), 0x0001_0081);
        assert_eq!(Keycode::from_name("SYS_WAKE"), Some(Keycode::SystemWakeUp));
    }

    #[test]
    fn application_launch_and_control_keys() {
        assert_eq!(Keycode::from_name("C_AC_SEARCH"), Some(Keycode::CAcSearch));
        assert_eq!(Keycode::CAcSearch.to_hid_usage(), 0x000C_0221);
        assert_eq!(Keycode::from_name("C_AL_CALC"), Some(Keycode::CAlCalculator));
        assert_eq!(Keycode::from_hid_usage(0x000C_00B3), Some(Keycode::CFastForward));
    }

    #[test]
    fn modified_usage_is_not_a_plain_keycode() {
        assert_eq!(Keycode::from_hid_usage(0x0207_0004), None);
    }

    #[test]
    fn canonical_names_are_unique_and_round_trip() {
        let mut seen = HashSet::new();
        for key in Keycode::iter() {
            assert!(seen.insert(key.to_name()), "duplicate name {}", key.to_name());
            assert_eq!(Keycode::from_name(key.to_name()), Some(key));
        }
    }
}
