pub const INDENT: isize = 4;

pub const COMMA: &str = ",";
pub const COLON: &str = ":";
pub const DOT: &str = ".";

pub const CASE: &str = "case";
pub const DEFAULT: &str = "default";
pub const SWITCH: &str = "switch";
pub const FUNC: &str = "func";
pub const PACKAGE: &str = "package";
pub const MAP: &str = "map";
pub const STRUCT: &str = "struct";
pub const INTERFACE: &str = "interface";
