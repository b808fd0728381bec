pub const CONTACT_CATEGORIES: [&str; 5] = [
    "Athlete Registration",
    "Host a Championship",
    "Sponsorship",
    "Media & Press",
    "General Inquiry",
];

pub const DEFAULT_CONFIRMATION_MS: u64 = 3_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactField {
    Name,
    Email,
    Phone,
    Institution,
    Category,
    Message,
}

impl ContactField {
    pub const ALL: [ContactField; 6] = [
        Self::Name,
        Self::Email,
        Self::Phone,
        Self::Institution,
        Self::Category,
        Self::Message,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Email => "Email",
            Self::Phone => "Phone",
            Self::Institution => "Institution",
            Self::Category => "Category",
            Self::Message => "Message",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactDetails {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub institution: String,
    pub category: String,
    pub message: String,
}

impl ContactDetails {
    pub fn get(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Phone => &self.phone,
            ContactField::Institution => &self.institution,
            ContactField::Category => &self.category,
            ContactField::Message => &self.message,
        }
    }

    pub fn get_mut(&mut self, field: ContactField) -> &mut String {
        match field {
            ContactField::Name => &mut self.name,
            ContactField::Email => &mut self.email,
            ContactField::Phone => &mut self.phone,
            ContactField::Institution => &mut self.institution,
            ContactField::Category => &mut self.category,
            ContactField::Message => &mut self.message,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionReceipt {
    pub details: ContactDetails,
    pub confirmed_until_ms: u64,
}

/// Contact form that only pretends to send. A submission shows a confirmation
/// for `confirmation_ms`, after which the fields are cleared.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactForm {
    details: ContactDetails,
    confirmation_ms: u64,
    confirmed_until_ms: Option<u64>,
}

impl Default for ContactForm {
    fn default() -> Self {
        Self::new(DEFAULT_CONFIRMATION_MS)
    }
}

impl ContactForm {
    pub fn new(confirmation_ms: u64) -> Self {
        Self {
            details: ContactDetails::default(),
            confirmation_ms,
            confirmed_until_ms: None,
        }
    }

    pub fn details(&self) -> &ContactDetails {
        &self.details
    }

    pub fn value(&self, field: ContactField) -> &str {
        self.details.get(field)
    }

    pub fn set(&mut self, field: ContactField, value: impl Into<String>) {
        *self.details.get_mut(field) = value.into();
    }

    pub fn is_submitted(&self) -> bool {
        self.confirmed_until_ms.is_some()
    }

    pub fn submit(&mut self, now_ms: u64) -> SubmissionReceipt {
        let confirmed_until_ms = now_ms.saturating_add(self.confirmation_ms);
        self.confirmed_until_ms = Some(confirmed_until_ms);
        SubmissionReceipt {
            details: self.details.clone(),
            confirmed_until_ms,
        }
    }

    /// Clears the confirmation and the fields once the deadline has passed.
    /// Returns `true` when that reset happened on this call.
    pub fn poll(&mut self, now_ms: u64) -> bool {
        match self.confirmed_until_ms {
            Some(deadline) if now_ms >= deadline => {
                self.confirmed_until_ms = None;
                self.details = ContactDetails::default();
                true
            }
            _ => false,
        }
    }
}
