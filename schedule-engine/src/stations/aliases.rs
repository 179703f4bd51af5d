//! Curated station aliases.
//!
//! Each entry maps a spoken or typed name to a canonical stop identifier.
//! English entries cover common short forms; Chinese entries cover both
//! translations and phonetic renderings produced by speech recognition.

use std::collections::HashMap;

/// English names and short forms.
const ENGLISH: &[(&str, &str)] = &[
    ("union", "UN"),
    ("union station", "UN"),
    ("downtown", "UN"),
    ("toronto union", "UN"),
    ("oriole", "OR"),
    ("oriole station", "OR"),
    ("oriole go", "OR"),
    ("bloor", "BL"),
    ("bloor station", "BL"),
    ("bloor go", "BL"),
    ("dundas west", "BL"),
    ("kennedy", "KE"),
    ("kennedy station", "KE"),
    ("scarborough", "SC"),
    ("scarborough go", "SC"),
    ("ajax", "AJ"),
    ("ajax go", "AJ"),
    ("pickering", "PIN"),
    ("pickering go", "PIN"),
    ("whitby", "WH"),
    ("whitby go", "WH"),
    ("oshawa", "OS"),
    ("oshawa go", "OS"),
    ("durham college", "OS"),
    ("richmond hill", "RI"),
    ("richmond hill go", "RI"),
    ("langstaff", "LA"),
    ("langstaff go", "LA"),
    ("aurora", "AU"),
    ("aurora go", "AU"),
    ("newmarket", "NE"),
    ("newmarket go", "NE"),
    ("bradford", "BD"),
    ("bradford go", "BD"),
    ("barrie", "BA"),
    ("barrie south", "BA"),
    ("allandale", "AD"),
    ("allandale waterfront", "AD"),
    ("milton", "ML"),
    ("milton go", "ML"),
    ("georgetown", "GE"),
    ("georgetown go", "GE"),
    ("guelph", "GL"),
    ("guelph central", "GL"),
    ("kitchener", "KI"),
    ("kitchener go", "KI"),
    ("brampton", "BE"),
    ("bramalea", "BE"),
    ("malton", "MA"),
    ("malton go", "MA"),
    ("pearson", "PA"),
    ("pearson airport", "PA"),
    ("airport", "PA"),
    ("etobicoke north", "ET"),
    ("weston", "WE"),
    ("kipling", "KP"),
    ("kipling go", "KP"),
    ("long branch", "LO"),
    ("long branch go", "LO"),
    ("mimico", "MI"),
    ("mimico go", "MI"),
    ("exhibition", "EX"),
    ("exhibition go", "EX"),
    ("port credit", "PO"),
    ("port credit go", "PO"),
    ("clarkson", "CL"),
    ("clarkson go", "CL"),
    ("oakville", "OA"),
    ("oakville go", "OA"),
    ("bronte", "BO"),
    ("bronte go", "BO"),
    ("appleby", "AP"),
    ("appleby go", "AP"),
    ("burlington", "BU"),
    ("burlington go", "BU"),
    ("aldershot", "AL"),
    ("aldershot go", "AL"),
    ("hamilton", "HA"),
    ("hamilton go", "HA"),
    ("west harbour", "WR"),
    ("west harbour go", "WR"),
    ("st catharines", "SCTH"),
    ("niagara falls", "NI"),
];

/// Chinese translations and phonetic renderings.
const CHINESE: &[(&str, &str)] = &[
    ("联合", "UN"),
    ("联合站", "UN"),
    ("联合车站", "UN"),
    ("市中心", "UN"),
    ("多伦多联合", "UN"),
    ("多伦多联合站", "UN"),
    ("尤尼恩", "UN"),
    ("优尼恩", "UN"),
    ("由尼恩", "UN"),
    ("金莺", "OR"),
    ("金莺站", "OR"),
    ("金莺车站", "OR"),
    ("奥里奥尔", "OR"),
    ("奥里奥尔站", "OR"),
    ("奥瑞欧", "OR"),
    ("欧瑞欧", "OR"),
    ("奥里欧", "OR"),
    ("布洛尔", "BL"),
    ("布洛尔站", "BL"),
    ("布鲁尔", "BL"),
    ("布鲁尔站", "BL"),
    ("肯尼迪", "KE"),
    ("肯尼迪站", "KE"),
    ("肯尼地", "KE"),
    ("士嘉堡", "SC"),
    ("士嘉堡站", "SC"),
    ("斯卡伯勒", "SC"),
    ("斯卡伯勒站", "SC"),
    ("阿贾克斯", "AJ"),
    ("阿贾克斯站", "AJ"),
    ("埃阿斯", "AJ"),
    ("皮克林", "PIN"),
    ("皮克林站", "PIN"),
    ("匹克林", "PIN"),
    ("惠特比", "WH"),
    ("惠特比站", "WH"),
    ("怀特比", "WH"),
    ("奥沙瓦", "OS"),
    ("奥沙瓦站", "OS"),
    ("奥沙华", "OS"),
    ("列治文山", "RI"),
    ("列治文山站", "RI"),
    ("里士满山", "RI"),
    ("里士满山站", "RI"),
    ("列治文希尔", "RI"),
    ("朗斯塔夫", "LA"),
    ("朗斯塔夫站", "LA"),
    ("兰斯塔夫", "LA"),
    ("奥罗拉", "AU"),
    ("奥罗拉站", "AU"),
    ("极光", "AU"),
    ("极光站", "AU"),
    ("欧若拉", "AU"),
    ("纽马克特", "NE"),
    ("纽马克特站", "NE"),
    ("新市场", "NE"),
    ("新市场站", "NE"),
    ("布拉德福德", "BD"),
    ("布拉德福德站", "BD"),
    ("布雷德福", "BD"),
    ("巴里", "BA"),
    ("巴里站", "BA"),
    ("巴里南", "BA"),
    ("阿兰代尔", "AD"),
    ("阿兰代尔站", "AD"),
    ("阿兰代尔海滨", "AD"),
    ("米尔顿", "ML"),
    ("米尔顿站", "ML"),
    ("密尔顿", "ML"),
    ("乔治敦", "GE"),
    ("乔治敦站", "GE"),
    ("佐治城", "GE"),
    ("圭尔夫", "GL"),
    ("圭尔夫站", "GL"),
    ("贵湖", "GL"),
    ("贵湖站", "GL"),
    ("基奇纳", "KI"),
    ("基奇纳站", "KI"),
    ("滑铁卢", "KI"),
    ("基秦拿", "KI"),
    ("布兰普顿", "BE"),
    ("布兰普顿站", "BE"),
    ("宾顿", "BE"),
    ("宾顿站", "BE"),
    ("布拉马利亚", "BE"),
    ("马尔顿", "MA"),
    ("马尔顿站", "MA"),
    ("莫尔顿", "MA"),
    ("皮尔逊", "PA"),
    ("皮尔逊机场", "PA"),
    ("机场", "PA"),
    ("多伦多机场", "PA"),
    ("皮尔森机场", "PA"),
    ("怡陶碧谷", "ET"),
    ("怡陶碧谷北", "ET"),
    ("伊桃碧谷", "ET"),
    ("伊桃碧谷北", "ET"),
    ("韦斯顿", "WE"),
    ("韦斯顿站", "WE"),
    ("威斯顿", "WE"),
    ("基普林", "KP"),
    ("基普林站", "KP"),
    ("吉卜林", "KP"),
    ("长枝", "LO"),
    ("长枝站", "LO"),
    ("朗布兰奇", "LO"),
    ("米米科", "MI"),
    ("米米科站", "MI"),
    ("美美高", "MI"),
    ("展览", "EX"),
    ("展览站", "EX"),
    ("展览场", "EX"),
    ("宝港", "PO"),
    ("宝港站", "PO"),
    ("港口信贷", "PO"),
    ("波特信贷", "PO"),
    ("克拉克森", "CL"),
    ("克拉克森站", "CL"),
    ("嘉逊", "CL"),
    ("奥克维尔", "OA"),
    ("奥克维尔站", "OA"),
    ("橡树镇", "OA"),
    ("橡树镇站", "OA"),
    ("布朗特", "BO"),
    ("布朗特站", "BO"),
    ("勃朗特", "BO"),
    ("阿普尔比", "AP"),
    ("阿普尔比站", "AP"),
    ("苹果比", "AP"),
    ("伯灵顿", "BU"),
    ("伯灵顿站", "BU"),
    ("布灵顿", "BU"),
    ("奥德肖特", "AL"),
    ("奥德肖特站", "AL"),
    ("阿尔德肖特", "AL"),
    ("汉密尔顿", "HA"),
    ("汉密尔顿站", "HA"),
    ("咸美顿", "HA"),
    ("西港", "WR"),
    ("西港站", "WR"),
    ("西海港", "WR"),
    ("圣凯瑟琳", "SCTH"),
    ("圣凯瑟琳站", "SCTH"),
    ("圣嘉芙莲", "SCTH"),
    ("尼亚加拉瀑布", "NI"),
    ("尼亚加拉瀑布站", "NI"),
    ("尼加拉瀑布", "NI"),
];

/// Lower-case and trim a free-form station name.
pub fn normalize(name: &str) -> String {
    name.trim().to_lowercase()
}

/// Alias → stop identifier lookup. Immutable after construction.
#[derive(Debug, Clone)]
pub struct AliasTable {
    map: HashMap<String, String>,
}

impl AliasTable {
    /// The curated English and Chinese aliases.
    pub fn builtin() -> Self {
        Self::from_entries(ENGLISH.iter().chain(CHINESE).copied())
    }

    /// Build from (alias, stop id) pairs. Aliases are normalized; a later
    /// duplicate wins.
    pub fn from_entries<'a>(entries: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        let map = entries
            .into_iter()
            .map(|(alias, stop_id)| (normalize(alias), stop_id.to_string()))
            .collect();
        Self { map }
    }

    /// Stop identifier for an already-normalized name.
    pub fn get(&self, normalized: &str) -> Option<&str> {
        self.map.get(normalized).map(String::as_str)
    }

    /// Number of aliases.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Whether the table has no aliases.
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

impl Default for AliasTable {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_trims_and_lowercases() {
        assert_eq!(normalize("  Union Station "), "union station");
        assert_eq!(normalize("联合站"), "联合站");
    }

    #[test]
    fn builtin_covers_both_languages() {
        let aliases = AliasTable::builtin();
        assert_eq!(aliases.get("union station"), Some("UN"));
        assert_eq!(aliases.get("金莺站"), Some("OR"));
        assert_eq!(aliases.get("奥瑞欧"), Some("OR"));
        assert_eq!(aliases.get("durham college"), Some("OS"));
        assert_eq!(aliases.len(), ENGLISH.len() + CHINESE.len());
    }

    #[test]
    fn lookup_expects_normalized_input() {
        let aliases = AliasTable::builtin();
        assert_eq!(aliases.get("Union Station"), None);
        assert_eq!(aliases.get(&normalize("Union Station")), Some("UN"));
    }

    #[test]
    fn from_entries_normalizes_keys() {
        let aliases = AliasTable::from_entries([(" Old Cummer ", "OL")]);
        assert_eq!(aliases.get("old cummer"), Some("OL"));
        assert!(!aliases.is_empty());
    }
}
