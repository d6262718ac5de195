use serde::{Deserialize, Serialize};

fn placeholder_url() -> String {
    "#".to_owned()
}

/// Call-to-action links shown in the hero section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ctas {
    /// Swap page for the token; `#` until listed.
    #[serde(default = "placeholder_url")]
    pub dex_url: String,
    /// Telegram group link.
    #[serde(default = "placeholder_url")]
    pub telegram: String,
    /// X/Twitter profile link.
    #[serde(default = "placeholder_url")]
    pub twitter: String,
}

impl Default for Ctas {
    fn default() -> Self {
        Self {
            dex_url: placeholder_url(),
            telegram: placeholder_url(),
            twitter: placeholder_url(),
        }
    }
}

/// Headline block at the top of the page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hero {
    pub title: String,
    /// Token symbol, including the `$`.
    pub ticker: String,
    pub subtitle: String,
    pub ctas: Ctas,
}

/// One slice of the supply breakdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenomicsItem {
    pub label: String,
    /// Share of supply in percent.
    pub value: u32,
    /// Short caption under the slice.
    pub note: String,
}

/// One numbered step of the buying guide.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HowToBuyStep {
    /// 1-based position in the guide.
    pub step: u32,
    pub title: String,
    pub detail: String,
}

/// A roadmap phase and its bullet points.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoadmapSection {
    pub title: String,
    pub points: Vec<String>,
}

/// A question and its answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FaqItem {
    /// Question.
    pub q: String,
    /// Answer.
    pub a: String,
}

/// Settings the page reads besides copy.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicConfig {
    /// Token contract address; empty until published.
    #[serde(default)]
    pub contract_address: String,
}

/// All editable copy of the landing page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteContent {
    pub hero: Hero,
    pub tokenomics: Vec<TokenomicsItem>,
    pub how_to_buy: Vec<HowToBuyStep>,
    pub roadmap: Vec<RoadmapSection>,
    pub faqs: Vec<FaqItem>,
    pub config: PublicConfig,
}

/// Content as returned by the remote store, where any section may be missing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PartialSiteContent {
    pub hero: Option<Hero>,
    pub tokenomics: Option<Vec<TokenomicsItem>>,
    pub how_to_buy: Option<Vec<HowToBuyStep>>,
    pub roadmap: Option<Vec<RoadmapSection>>,
    pub faqs: Option<Vec<FaqItem>>,
    pub config: Option<PublicConfig>,
}

impl From<SiteContent> for PartialSiteContent {
    fn from(content: SiteContent) -> Self {
        Self {
            hero: Some(content.hero),
            tokenomics: Some(content.tokenomics),
            how_to_buy: Some(content.how_to_buy),
            roadmap: Some(content.roadmap),
            faqs: Some(content.faqs),
            config: Some(content.config),
        }
    }
}

/// Fills every section missing from `remote` with the matching section of `defaults`.
#[must_use]
pub fn merge_with_defaults(
    remote: Option<PartialSiteContent>,
    defaults: &SiteContent,
) -> SiteContent {
    let remote = remote.unwrap_or_default();
    SiteContent {
        hero: remote.hero.unwrap_or_else(|| defaults.hero.clone()),
        tokenomics: remote
            .tokenomics
            .unwrap_or_else(|| defaults.tokenomics.clone()),
        how_to_buy: remote
            .how_to_buy
            .unwrap_or_else(|| defaults.how_to_buy.clone()),
        roadmap: remote.roadmap.unwrap_or_else(|| defaults.roadmap.clone()),
        faqs: remote.faqs.unwrap_or_else(|| defaults.faqs.clone()),
        config: remote.config.unwrap_or_else(|| defaults.config.clone()),
    }
}

fn tokenomics(label: &str, value: u32, note: &str) -> TokenomicsItem {
    TokenomicsItem {
        label: label.to_owned(),
        value,
        note: note.to_owned(),
    }
}

fn step(step: u32, title: &str, detail: &str) -> HowToBuyStep {
    HowToBuyStep {
        step,
        title: title.to_owned(),
        detail: detail.to_owned(),
    }
}

fn phase(title: &str, points: &[&str]) -> RoadmapSection {
    RoadmapSection {
        title: title.to_owned(),
        points: points.iter().map(|p| (*p).to_owned()).collect(),
    }
}

fn faq(q: &str, a: &str) -> FaqItem {
    FaqItem {
        q: q.to_owned(),
        a: a.to_owned(),
    }
}

impl Default for SiteContent {
    /// The copy seeded into an empty store.
    fn default() -> Self {
        Self {
            hero: Hero {
                title: "KING OF GAMBLER".to_owned(),
                ticker: "$KOG".to_owned(),
                subtitle: "From cell to casino \u{2014} the legendary Long Si is back to reclaim \
                           his throne. Dark. Rebellious. Unstoppable."
                    .to_owned(),
                ctas: Ctas::default(),
            },
            tokenomics: vec![
                tokenomics("Liquidity", 50, "Locked at launch"),
                tokenomics("Community & Airdrops", 25, "For real degens"),
                tokenomics("Marketing", 15, "Partnerships & PR"),
                tokenomics("CEX/Reserve", 10, "Strategic listings"),
            ],
            how_to_buy: vec![
                step(1, "Get a Wallet", "Use MetaMask or any EVM-compatible wallet."),
                step(2, "Fund with ETH", "Transfer ETH to your wallet for gas and swaps."),
                step(3, "Go to DEX", "Use our DEX link and paste the $KOG contract."),
                step(
                    4,
                    "Swap & Hold",
                    "Set slippage if needed. Welcome to the high-rollers club.",
                ),
            ],
            roadmap: vec![
                phase(
                    "Phase I \u{2014} Breakout",
                    &["Contract deploy", "Stealth + fair launch", "Community ignition"],
                ),
                phase(
                    "Phase II \u{2014} Back to the Table",
                    &["DEX pools + liquidity", "Marketing waves", "Meme ops & partnerships"],
                ),
                phase(
                    "Phase III \u{2014} Crown the King",
                    &["CEX outreach", "On-chain mini-games", "DAO vibes & community events"],
                ),
            ],
            faqs: vec![
                faq(
                    "What chain is $KOG on?",
                    "$KOG launches on Ethereum. Bridge/multichain decisions will be driven by \
                     the community.",
                ),
                faq(
                    "When is DEX live?",
                    "DEX listing drops soon. Stay tuned on Telegram/Twitter for the exact time.",
                ),
                faq(
                    "Is liquidity locked?",
                    "Yes. We lock liquidity at launch to protect holders.",
                ),
                faq(
                    "What makes $KOG different?",
                    "A cinematic meme coin built on grit, risk, and comeback energy \u{2014} with \
                     a bold dark-neo aesthetic.",
                ),
            ],
            config: PublicConfig::default(),
        }
    }
}
