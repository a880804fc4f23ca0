//! Account entities for the two kinds of marketplace participants.
//!
//! Travelers book tours and guiders offer them. Both share credential and
//! verification state through [`AccountBase`] and expose it uniformly through
//! the [`Credentialed`] capability trait.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Badge granted to every newly registered traveler
pub const TRAVELER_WELCOME_BADGE: &str = "New Traveller Mate";

/// Badge granted to every newly registered guider
pub const GUIDER_STARTER_BADGE: &str = "Guider Mate";

/// Tour points granted to a newly registered guider
pub const GUIDER_STARTER_POINTS: u32 = 50;

/// Currency applied when a guider does not state one
pub const DEFAULT_CURRENCY: &str = "INR";

/// Discriminates the two account variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccountKind {
    Traveler,
    Guider,
}

impl AccountKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            AccountKind::Traveler => "traveler",
            AccountKind::Guider => "guider",
        }
    }
}

impl std::fmt::Display for AccountKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for AccountKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "traveler" | "traveller" | "tourist" => Ok(AccountKind::Traveler),
            "guider" | "guide" => Ok(AccountKind::Guider),
            _ => Err(format!("Invalid account kind: {}", s)),
        }
    }
}

/// Individual guide or registered tour agency
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GuiderType {
    Professional,
    Agency,
}

impl GuiderType {
    pub fn as_str(&self) -> &'static str {
        match self {
            GuiderType::Professional => "Professional",
            GuiderType::Agency => "Agency",
        }
    }
}

impl std::str::FromStr for GuiderType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Professional" | "professional" => Ok(GuiderType::Professional),
            "Agency" | "agency" => Ok(GuiderType::Agency),
            _ => Err(format!("Invalid guider type: {}", s)),
        }
    }
}

/// Administrative review state of a guider profile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApprovalStatus {
    #[default]
    Pending,
    Approved,
    Rejected,
}

impl ApprovalStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ApprovalStatus::Pending => "pending",
            ApprovalStatus::Approved => "approved",
            ApprovalStatus::Rejected => "rejected",
        }
    }
}

impl std::str::FromStr for ApprovalStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pending" => Ok(ApprovalStatus::Pending),
            "approved" => Ok(ApprovalStatus::Approved),
            "rejected" => Ok(ApprovalStatus::Rejected),
            _ => Err(format!("Invalid approval status: {}", s)),
        }
    }
}

/// A guider's published prices. Any subset may be set.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RateSchedule {
    pub price_per_hour: Option<f64>,
    pub price_per_day: Option<f64>,
    pub price_per_tour: Option<f64>,
}

/// State shared by both account variants
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccountBase {
    pub id: Uuid,
    /// Lowercased, unique per account kind
    pub email: String,
    pub mobile: Option<String>,
    pub password_hash: String,
    pub is_verified: bool,
    pub is_active: bool,
    pub tour_points: u32,
    pub badges: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl AccountBase {
    fn new(email: String, mobile: Option<String>, password_hash: String) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            email,
            mobile,
            password_hash,
            is_verified: false,
            is_active: true,
            tour_points: 0,
            badges: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Bump `updated_at`
    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

/// A consumer account that books tours
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Traveler {
    pub base: AccountBase,
    pub first_name: String,
    pub last_name: String,
    pub city: Option<String>,
    pub travel_styles: Vec<String>,
}

impl Traveler {
    /// Creates an unverified traveler carrying the welcome badge and no points
    pub fn new(
        email: String,
        mobile: Option<String>,
        password_hash: String,
        first_name: String,
        last_name: String,
    ) -> Self {
        let mut base = AccountBase::new(email, mobile, password_hash);
        base.badges.push(TRAVELER_WELCOME_BADGE.to_string());
        Self {
            base,
            first_name,
            last_name,
            city: None,
            travel_styles: Vec::new(),
        }
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }
}

/// A provider account offering guided tours
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Guider {
    pub base: AccountBase,
    pub showcase_name: String,
    pub full_name: Option<String>,
    pub guider_type: GuiderType,
    pub city: Option<String>,
    pub overview: Option<String>,
    pub languages: Vec<String>,
    pub approval_status: ApprovalStatus,
    pub rates: RateSchedule,
    pub currency: String,
    /// Mean of all review ratings; written only by the review aggregator
    pub rating: f64,
    pub total_reviews: u32,
}

impl Guider {
    /// Creates an unverified, pending guider with the starter badge and points
    ///
    /// Professional guiders have their full name pre-filled from the showcase
    /// name.
    pub fn new(
        email: String,
        mobile: Option<String>,
        password_hash: String,
        showcase_name: String,
        guider_type: GuiderType,
    ) -> Self {
        let mut base = AccountBase::new(email, mobile, password_hash);
        base.badges.push(GUIDER_STARTER_BADGE.to_string());
        base.tour_points = GUIDER_STARTER_POINTS;
        let full_name = match guider_type {
            GuiderType::Professional => Some(showcase_name.clone()),
            GuiderType::Agency => None,
        };
        Self {
            base,
            showcase_name,
            full_name,
            guider_type,
            city: None,
            overview: None,
            languages: Vec::new(),
            approval_status: ApprovalStatus::Pending,
            rates: RateSchedule::default(),
            currency: DEFAULT_CURRENCY.to_string(),
            rating: 0.0,
            total_reviews: 0,
        }
    }

    /// Active and approved guiders are visible and bookable
    pub fn is_bookable(&self) -> bool {
        self.base.is_active && self.approval_status == ApprovalStatus::Approved
    }
}

/// Either kind of account
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Account {
    Traveler(Traveler),
    Guider(Guider),
}

impl Account {
    pub fn kind(&self) -> AccountKind {
        match self {
            Account::Traveler(_) => AccountKind::Traveler,
            Account::Guider(_) => AccountKind::Guider,
        }
    }

    pub fn base(&self) -> &AccountBase {
        match self {
            Account::Traveler(t) => &t.base,
            Account::Guider(g) => &g.base,
        }
    }

    pub fn base_mut(&mut self) -> &mut AccountBase {
        match self {
            Account::Traveler(t) => &mut t.base,
            Account::Guider(g) => &mut g.base,
        }
    }

    pub fn id(&self) -> Uuid {
        self.base().id
    }

    pub fn email(&self) -> &str {
        &self.base().email
    }

    /// Name used to greet the account holder in notifications
    pub fn display_name(&self) -> String {
        match self {
            Account::Traveler(t) => t.full_name(),
            Account::Guider(g) => g.showcase_name.clone(),
        }
    }

    /// Replace the stored password hash
    pub fn set_password_hash(&mut self, password_hash: String) {
        let base = self.base_mut();
        base.password_hash = password_hash;
        base.touch();
    }

    pub fn set_active(&mut self, active: bool) {
        let base = self.base_mut();
        base.is_active = active;
        base.touch();
    }

    /// Client-safe view without password material
    pub fn profile(&self) -> AccountProfile {
        match self {
            Account::Traveler(t) => AccountProfile::Traveler(TravelerProfile::from(t)),
            Account::Guider(g) => AccountProfile::Guider(GuiderProfile::from(g)),
        }
    }
}

impl From<Traveler> for Account {
    fn from(traveler: Traveler) -> Self {
        Account::Traveler(traveler)
    }
}

impl From<Guider> for Account {
    fn from(guider: Guider) -> Self {
        Account::Guider(guider)
    }
}

/// Credential and verification capabilities common to every account
pub trait Credentialed {
    fn base(&self) -> &AccountBase;
    fn base_mut(&mut self) -> &mut AccountBase;

    /// Whether a password credential has been set
    fn has_credential(&self) -> bool {
        !self.base().password_hash.is_empty()
    }

    fn password_hash(&self) -> &str {
        &self.base().password_hash
    }

    fn is_verified(&self) -> bool {
        self.base().is_verified
    }

    fn is_active(&self) -> bool {
        self.base().is_active
    }

    /// Flip `is_verified` to true. Returns `false` when it already was.
    fn mark_verified(&mut self) -> bool {
        let base = self.base_mut();
        if base.is_verified {
            return false;
        }
        base.is_verified = true;
        base.touch();
        true
    }
}

impl Credentialed for Traveler {
    fn base(&self) -> &AccountBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut AccountBase {
        &mut self.base
    }
}

impl Credentialed for Guider {
    fn base(&self) -> &AccountBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut AccountBase {
        &mut self.base
    }
}

impl Credentialed for Account {
    fn base(&self) -> &AccountBase {
        Account::base(self)
    }

    fn base_mut(&mut self) -> &mut AccountBase {
        Account::base_mut(self)
    }
}

/// Sanitized traveler view
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TravelerProfile {
    pub id: Uuid,
    pub email: String,
    pub mobile: Option<String>,
    pub first_name: String,
    pub last_name: String,
    pub city: Option<String>,
    pub travel_styles: Vec<String>,
    pub tour_points: u32,
    pub badges: Vec<String>,
    pub is_verified: bool,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

impl From<&Traveler> for TravelerProfile {
    fn from(t: &Traveler) -> Self {
        Self {
            id: t.base.id,
            email: t.base.email.clone(),
            mobile: t.base.mobile.clone(),
            first_name: t.first_name.clone(),
            last_name: t.last_name.clone(),
            city: t.city.clone(),
            travel_styles: t.travel_styles.clone(),
            tour_points: t.base.tour_points,
            badges: t.base.badges.clone(),
            is_verified: t.base.is_verified,
            is_active: t.base.is_active,
            created_at: t.base.created_at,
        }
    }
}

/// Sanitized guider view
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GuiderProfile {
    pub id: Uuid,
    pub email: String,
    pub mobile: Option<String>,
    pub showcase_name: String,
    pub full_name: Option<String>,
    pub guider_type: GuiderType,
    pub city: Option<String>,
    pub overview: Option<String>,
    pub languages: Vec<String>,
    pub approval_status: ApprovalStatus,
    #[serde(flatten)]
    pub rates: RateSchedule,
    pub currency: String,
    pub rating: f64,
    pub total_reviews: u32,
    pub tour_points: u32,
    pub badges: Vec<String>,
    pub is_verified: bool,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

impl From<&Guider> for GuiderProfile {
    fn from(g: &Guider) -> Self {
        Self {
            id: g.base.id,
            email: g.base.email.clone(),
            mobile: g.base.mobile.clone(),
            showcase_name: g.showcase_name.clone(),
            full_name: g.full_name.clone(),
            guider_type: g.guider_type,
            city: g.city.clone(),
            overview: g.overview.clone(),
            languages: g.languages.clone(),
            approval_status: g.approval_status,
            rates: g.rates,
            currency: g.currency.clone(),
            rating: g.rating,
            total_reviews: g.total_reviews,
            tour_points: g.base.tour_points,
            badges: g.base.badges.clone(),
            is_verified: g.base.is_verified,
            is_active: g.base.is_active,
            created_at: g.base.created_at,
        }
    }
}

/// Sanitized account view, tagged by `kind`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum AccountProfile {
    Traveler(TravelerProfile),
    Guider(GuiderProfile),
}

impl AccountProfile {
    pub fn id(&self) -> Uuid {
        match self {
            AccountProfile::Traveler(t) => t.id,
            AccountProfile::Guider(g) => g.id,
        }
    }

    pub fn is_verified(&self) -> bool {
        match self {
            AccountProfile::Traveler(t) => t.is_verified,
            AccountProfile::Guider(g) => g.is_verified,
        }
    }
}
