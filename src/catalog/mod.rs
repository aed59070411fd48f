//! Fixed catalog of icon identifiers a category may reference.
//!
//! The renderable symbols themselves belong to the presentation layer; this
//! module only answers membership questions.

use once_cell::sync::Lazy;

/// Icon assigned to a brand-new category draft.
pub const DEFAULT_ICON: &str = "HelpCircle";

const ICON_NAMES: &[&str] = &[
    "Accessibility", "Activity", "Airplay", "AlarmClock", "AlertCircle", "Archive",
    "ArrowDown", "ArrowLeft", "ArrowRight", "ArrowUp", "Award", "Backpack", "Badge",
    "BaggageClaim", "Banana", "Banknote", "BarChart", "Basket", "Battery", "Bed",
    "Beer", "Bell", "Bike", "Bitcoin", "Book", "BookOpen", "Bookmark", "Briefcase",
    "Brush", "Bug", "Building", "Bus", "Calculator", "Calendar", "Camera", "Car",
    "Carrot", "Check", "ChevronDown", "ChevronLeft", "ChevronRight", "ChevronUp",
    "Circle", "Clipboard", "Clock", "Cloud", "Code", "Cog", "Coins", "Compass",
    "Computer", "Copy", "CreditCard", "CupSoda", "Database", "Delete", "Diamond",
    "Dog", "DollarSign", "Download", "Droplet", "Dumbbell", "Edit", "Egg",
    "ExternalLink", "Eye", "Facebook", "Feather", "File", "Film", "Filter", "Flag",
    "Flame", "FlaskConical", "Flower", "Folder", "Football", "Forklift", "Forward",
    "Frown", "Fuel", "FunctionSquare", "Gamepad2", "Gem", "Gift", "Github",
    "Gitlab", "Globe", "GraduationCap", "Grid", "Hammer", "Hand", "HardDrive",
    "Hash", "Headphones", "Heart", "HeartHandshake", "HeartPulse", "HelpCircle",
    "Home", "Image", "Inbox", "Instagram", "Key", "Keyboard", "Landmark",
    "Languages", "Laptop", "Laugh", "Layers", "Layout", "Library", "LifeBuoy",
    "Lightbulb", "Link", "List", "Linkedin", "Loader", "Lock", "LogIn", "LogOut",
    "Mail", "Map", "MapPin", "Maximize", "Meh", "Menu", "MessageCircle",
    "MessageSquare", "Mic", "Minimize", "Minus", "Monitor", "Moon",
    "MoreHorizontal", "MoreVertical", "Mouse", "Move", "Music", "Navigation",
    "Package", "PaintRoller", "Palette", "Paperclip", "PartyPopper", "Pause",
    "Pen", "Percent", "PersonStanding", "Phone", "PieChart", "PiggyBank", "Pin",
    "Plane", "PlaneTakeoff", "Play", "Plug", "Plus", "Pocket", "Podcast", "Power",
    "Printer", "Puzzle", "QrCode", "Quote", "Radio", "Receipt",
    "RectangleHorizontal", "Recycle", "RefreshCcw", "RefreshCw", "Repeat",
    "Reply", "Rocket", "Save", "Scale", "School", "ScreenShare", "Search", "Send",
    "Settings", "Share", "Share2", "Sheet", "Shield", "ShieldAlert", "Shirt",
    "ShoppingCart", "Sigma", "Signal", "Siren", "Slack", "Smartphone", "Smile",
    "Speaker", "Star", "Store", "Sun", "Sunrise", "Sunset", "Table", "Tablet",
    "Tag", "Target", "Tent", "Terminal", "ThumbsDown", "ThumbsUp", "Ticket",
    "Timer", "ToyBrick", "Train", "Trash", "Trash2", "TrendingDown", "TrendingUp",
    "Triangle", "Trophy", "Truck", "Twitch", "Twitter", "Type", "Umbrella",
    "Unlink", "Upload", "Utensils", "UtensilsCrossed", "Verified", "Video",
    "Voicemail", "Volume", "Volume1", "Volume2", "VolumeX", "Wallet", "Watch",
    "Wifi", "Wind", "Wine", "WrapText", "Wrench", "X", "Youtube", "Zap",
];

static SORTED: Lazy<Vec<&'static str>> = Lazy::new(|| {
    let mut names = ICON_NAMES.to_vec();
    names.sort_unstable();
    names
});

/// Every catalog identifier, sorted, for selector population.
pub fn all() -> &'static [&'static str] {
    &SORTED
}

pub fn is_known(name: &str) -> bool {
    SORTED.binary_search(&name).is_ok()
}
