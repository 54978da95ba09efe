//! Entity descriptors: the five managed record types as data.
//!
//! Each descriptor names the REST slug, the identity key list (domain
//! primary key first, legacy `id` as fallback), the table columns, the form
//! field schema, and the filter definitions. The list and form components are
//! generic over this table; adding an entity means adding a descriptor, not
//! a page.

use common::model::record::Record;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Patients,
    Clients,
    Providers,
    Referrals,
    Services,
}

impl EntityKind {
    pub const ALL: [EntityKind; 5] = [
        EntityKind::Patients,
        EntityKind::Clients,
        EntityKind::Providers,
        EntityKind::Referrals,
        EntityKind::Services,
    ];

    pub fn descriptor(self) -> &'static EntityDescriptor {
        match self {
            EntityKind::Patients => &PATIENTS,
            EntityKind::Clients => &CLIENTS,
            EntityKind::Providers => &PROVIDERS,
            EntityKind::Referrals => &REFERRALS,
            EntityKind::Services => &SERVICES,
        }
    }
}

pub struct EntityDescriptor {
    /// REST path segment under the API base URL.
    pub slug: &'static str,
    pub title: &'static str,
    pub singular: &'static str,
    pub description: &'static str,
    /// Identity key candidates in priority order. Whichever is present and
    /// non-null on a record is its canonical id.
    pub identity: &'static [&'static str],
    pub columns: &'static [ColumnDef],
    pub fields: &'static [FieldDef],
    pub filters: &'static [FilterDef],
}

impl EntityDescriptor {
    pub fn identity_of(&self, record: &Record) -> Option<String> {
        record.first_string(self.identity)
    }

    /// True if any form field or filter draws its options from a reference
    /// endpoint, in which case the view loads those lists once on mount.
    pub fn needs_reference_data(&self) -> bool {
        self.fields
            .iter()
            .any(|field| matches!(field.kind, FieldKind::Reference(_)))
            || self
                .filters
                .iter()
                .any(|filter| matches!(filter.kind, FilterKind::Reference(_)))
    }
}

pub struct ColumnDef {
    pub key: &'static str,
    pub label: &'static str,
    pub cell: CellKind,
}

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum CellKind {
    Text,
    Phone,
}

pub struct FieldDef {
    pub key: &'static str,
    pub label: &'static str,
    pub section: &'static str,
    pub kind: FieldKind,
    pub required: bool,
    /// Initial value seeded into a create draft ("" for most fields).
    pub default: &'static str,
}

pub enum FieldKind {
    Text,
    Email,
    Phone,
    Date,
    TextArea,
    /// Integer payload; blank submits as null.
    Number,
    /// Boolean payload.
    Checkbox,
    Select(&'static [SelectOption]),
    /// Select fed from a reference endpoint; integer foreign-key payload.
    Reference(ReferenceList),
    /// Free-text id of a related record; integer foreign-key payload.
    ForeignKey,
}

pub struct SelectOption {
    pub value: &'static str,
    pub label: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReferenceList {
    ReferralTypes,
    ReferralStatuses,
}

impl ReferenceList {
    pub fn slug(self) -> &'static str {
        match self {
            ReferenceList::ReferralTypes => "referral-types",
            ReferenceList::ReferralStatuses => "referral-status",
        }
    }
}

pub struct FilterDef {
    pub key: &'static str,
    pub label: &'static str,
    pub kind: FilterKind,
}

pub enum FilterKind {
    Select(&'static [SelectOption]),
    Reference(ReferenceList),
    Number,
    Date,
}

const fn opt(value: &'static str, label: &'static str) -> SelectOption {
    SelectOption { value, label }
}

const fn text_col(key: &'static str, label: &'static str) -> ColumnDef {
    ColumnDef {
        key,
        label,
        cell: CellKind::Text,
    }
}

const fn phone_col(key: &'static str, label: &'static str) -> ColumnDef {
    ColumnDef {
        key,
        label,
        cell: CellKind::Phone,
    }
}

const fn field(
    key: &'static str,
    label: &'static str,
    section: &'static str,
    kind: FieldKind,
) -> FieldDef {
    FieldDef {
        key,
        label,
        section,
        kind,
        required: false,
        default: "",
    }
}

const fn required(mut def: FieldDef) -> FieldDef {
    def.required = true;
    def
}

const fn with_default(mut def: FieldDef, default: &'static str) -> FieldDef {
    def.default = default;
    def
}

const STATUS_OPTIONS: &[SelectOption] = &[
    opt("active", "Active"),
    opt("inactive", "Inactive"),
    opt("pending", "Pending"),
];

const GENDER_OPTIONS: &[SelectOption] = &[opt("M", "Male"), opt("F", "Female"), opt("O", "Other")];

const CLIENT_TYPE_OPTIONS: &[SelectOption] = &[
    opt("hospital", "Hospital"),
    opt("clinic", "Clinic"),
    opt("insurance", "Insurance"),
    opt("corporate", "Corporate"),
];

const PROVIDER_TYPE_OPTIONS: &[SelectOption] = &[
    opt("individual", "Individual"),
    opt("organization", "Organization"),
    opt("facility", "Facility"),
];

const SPECIALTY_OPTIONS: &[SelectOption] = &[
    opt("primary_care", "Primary Care"),
    opt("cardiology", "Cardiology"),
    opt("orthopedics", "Orthopedics"),
    opt("neurology", "Neurology"),
    opt("oncology", "Oncology"),
    opt("pediatrics", "Pediatrics"),
    opt("psychiatry", "Psychiatry"),
    opt("surgery", "Surgery"),
];

const NETWORK_STATUS_OPTIONS: &[SelectOption] = &[
    opt("in_network", "In Network"),
    opt("out_of_network", "Out of Network"),
];

const PRIORITY_OPTIONS: &[SelectOption] = &[
    opt("low", "Low"),
    opt("normal", "Normal"),
    opt("high", "High"),
    opt("urgent", "Urgent"),
];

const SERVICE_TYPE_OPTIONS: &[SelectOption] = &[
    opt("medical", "Medical"),
    opt("diagnostic", "Diagnostic"),
    opt("therapeutic", "Therapeutic"),
    opt("preventive", "Preventive"),
    opt("emergency", "Emergency"),
    opt("consultation", "Consultation"),
];

const SERVICE_CATEGORY_OPTIONS: &[SelectOption] = &[
    opt("primary_care", "Primary Care"),
    opt("specialty_care", "Specialty Care"),
    opt("urgent_care", "Urgent Care"),
    opt("home_health", "Home Health"),
    opt("telehealth", "Telehealth"),
    opt("mental_health", "Mental Health"),
];

const YES_NO_OPTIONS: &[SelectOption] = &[opt("true", "Yes"), opt("false", "No")];

static PATIENTS: EntityDescriptor = EntityDescriptor {
    slug: "patients",
    title: "Patient Management",
    singular: "patient",
    description: "Manage patient records and medical information",
    identity: &["pkpatientid", "id"],
    columns: &[
        text_col("firstname", "First Name"),
        text_col("lastname", "Last Name"),
        text_col("email", "Email"),
        phone_col("phone", "Phone"),
        text_col("gender", "Gender"),
        text_col("dateofbirth", "Date of Birth"),
        text_col("medical_record_number", "MRN"),
    ],
    fields: &[
        required(field("firstname", "First Name", "Personal Information", FieldKind::Text)),
        required(field("lastname", "Last Name", "Personal Information", FieldKind::Text)),
        field("email", "Email", "Personal Information", FieldKind::Email),
        field("phone", "Phone", "Personal Information", FieldKind::Phone),
        field("gender", "Gender", "Personal Information", FieldKind::Select(GENDER_OPTIONS)),
        field("dateofbirth", "Date of Birth", "Personal Information", FieldKind::Date),
        field("address", "Street Address", "Address Information", FieldKind::TextArea),
        field("city", "City", "Address Information", FieldKind::Text),
        field("state", "State", "Address Information", FieldKind::Text),
        field("zip_code", "ZIP Code", "Address Information", FieldKind::Text),
        field("emergency_contact", "Emergency Contact Name", "Emergency Contact", FieldKind::Text),
        field("emergency_phone", "Emergency Contact Phone", "Emergency Contact", FieldKind::Phone),
        field(
            "medical_record_number",
            "Medical Record Number",
            "Medical Information",
            FieldKind::Text,
        ),
        field("insurance_id", "Insurance ID", "Medical Information", FieldKind::Text),
        field("notes", "Notes", "Notes", FieldKind::TextArea),
    ],
    filters: &[
        FilterDef { key: "gender", label: "Gender", kind: FilterKind::Select(GENDER_OPTIONS) },
        FilterDef { key: "age_min", label: "Minimum Age", kind: FilterKind::Number },
        FilterDef { key: "age_max", label: "Maximum Age", kind: FilterKind::Number },
        FilterDef { key: "created_after", label: "Created After", kind: FilterKind::Date },
    ],
};

static CLIENTS: EntityDescriptor = EntityDescriptor {
    slug: "clients",
    title: "Client Management",
    singular: "client",
    description: "Manage client organizations and contracts",
    identity: &["pkclientid", "id"],
    columns: &[
        text_col("name", "Name"),
        text_col("client_type", "Type"),
        text_col("contact_person", "Contact"),
        text_col("email", "Email"),
        phone_col("phone", "Phone"),
        text_col("status", "Status"),
    ],
    fields: &[
        required(field("name", "Name", "Organization", FieldKind::Text)),
        field(
            "client_type",
            "Client Type",
            "Organization",
            FieldKind::Select(CLIENT_TYPE_OPTIONS),
        ),
        field("contact_person", "Contact Person", "Contact", FieldKind::Text),
        field("email", "Email", "Contact", FieldKind::Email),
        field("phone", "Phone", "Contact", FieldKind::Phone),
        field("address", "Street Address", "Address", FieldKind::TextArea),
        field("city", "City", "Address", FieldKind::Text),
        field("state", "State", "Address", FieldKind::Text),
        field("zip_code", "ZIP Code", "Address", FieldKind::Text),
        with_default(
            field("status", "Status", "Status & Notes", FieldKind::Select(STATUS_OPTIONS)),
            "active",
        ),
        field("notes", "Notes", "Status & Notes", FieldKind::TextArea),
    ],
    filters: &[
        FilterDef {
            key: "client_type",
            label: "Client Type",
            kind: FilterKind::Select(CLIENT_TYPE_OPTIONS),
        },
        FilterDef { key: "status", label: "Status", kind: FilterKind::Select(STATUS_OPTIONS) },
        FilterDef { key: "created_after", label: "Created After", kind: FilterKind::Date },
    ],
};

static PROVIDERS: EntityDescriptor = EntityDescriptor {
    slug: "providers",
    title: "Provider Management",
    singular: "provider",
    description: "Manage healthcare providers and networks",
    identity: &["pkproviderid", "id"],
    columns: &[
        text_col("name", "Name"),
        text_col("provider_type", "Type"),
        text_col("specialty", "Specialty"),
        text_col("npi_number", "NPI"),
        phone_col("phone", "Phone"),
        text_col("status", "Status"),
        text_col("network_status", "Network"),
    ],
    fields: &[
        required(field("name", "Name", "Provider", FieldKind::Text)),
        with_default(
            field(
                "provider_type",
                "Provider Type",
                "Provider",
                FieldKind::Select(PROVIDER_TYPE_OPTIONS),
            ),
            "individual",
        ),
        field("first_name", "First Name", "Provider", FieldKind::Text),
        field("last_name", "Last Name", "Provider", FieldKind::Text),
        field("title", "Title", "Provider", FieldKind::Text),
        field("specialty", "Specialty", "Credentials", FieldKind::Select(SPECIALTY_OPTIONS)),
        field("subspecialty", "Subspecialty", "Credentials", FieldKind::Text),
        field("npi_number", "NPI Number", "Credentials", FieldKind::Text),
        field("license_number", "License Number", "Credentials", FieldKind::Text),
        field("license_state", "License State", "Credentials", FieldKind::Text),
        field("dea_number", "DEA Number", "Credentials", FieldKind::Text),
        field("tax_id", "Tax ID", "Credentials", FieldKind::Text),
        field("phone", "Phone", "Contact", FieldKind::Phone),
        field("fax", "Fax", "Contact", FieldKind::Phone),
        field("email", "Email", "Contact", FieldKind::Email),
        field("practice_name", "Practice Name", "Practice", FieldKind::Text),
        field("practice_address", "Practice Address", "Practice", FieldKind::TextArea),
        field("practice_city", "Practice City", "Practice", FieldKind::Text),
        field("practice_state", "Practice State", "Practice", FieldKind::Text),
        field("practice_zip", "Practice ZIP", "Practice", FieldKind::Text),
        field("billing_address", "Billing Address", "Billing", FieldKind::TextArea),
        field("billing_city", "Billing City", "Billing", FieldKind::Text),
        field("billing_state", "Billing State", "Billing", FieldKind::Text),
        field("billing_zip", "Billing ZIP", "Billing", FieldKind::Text),
        with_default(
            field("status", "Status", "Network", FieldKind::Select(STATUS_OPTIONS)),
            "active",
        ),
        with_default(
            field(
                "network_status",
                "Network Status",
                "Network",
                FieldKind::Select(NETWORK_STATUS_OPTIONS),
            ),
            "in_network",
        ),
        field("contract_start_date", "Contract Start", "Network", FieldKind::Date),
        field("contract_end_date", "Contract End", "Network", FieldKind::Date),
        field("notes", "Notes", "Notes", FieldKind::TextArea),
    ],
    filters: &[
        FilterDef {
            key: "provider_type",
            label: "Provider Type",
            kind: FilterKind::Select(PROVIDER_TYPE_OPTIONS),
        },
        FilterDef {
            key: "specialty",
            label: "Specialty",
            kind: FilterKind::Select(SPECIALTY_OPTIONS),
        },
        FilterDef { key: "status", label: "Status", kind: FilterKind::Select(STATUS_OPTIONS) },
        FilterDef { key: "created_after", label: "Created After", kind: FilterKind::Date },
    ],
};

static REFERRALS: EntityDescriptor = EntityDescriptor {
    slug: "referrals",
    title: "Referral Management",
    singular: "referral",
    description: "Manage patient referrals and tracking",
    identity: &["pkreferralid", "id"],
    columns: &[
        text_col("patient_id", "Patient"),
        text_col("referring_provider_id", "Referring Provider"),
        text_col("referred_to_provider_id", "Referred To"),
        text_col("priority", "Priority"),
        text_col("referral_date", "Referral Date"),
        text_col("due_date", "Due"),
    ],
    fields: &[
        required(field("patient_id", "Patient ID", "Basic Information", FieldKind::ForeignKey)),
        field(
            "referring_provider_id",
            "Referring Provider ID",
            "Basic Information",
            FieldKind::ForeignKey,
        ),
        field(
            "referred_to_provider_id",
            "Referred To Provider ID",
            "Basic Information",
            FieldKind::ForeignKey,
        ),
        field(
            "referral_type_id",
            "Referral Type",
            "Basic Information",
            FieldKind::Reference(ReferenceList::ReferralTypes),
        ),
        field(
            "status_id",
            "Status",
            "Status & Priority",
            FieldKind::Reference(ReferenceList::ReferralStatuses),
        ),
        with_default(
            field(
                "priority",
                "Priority",
                "Status & Priority",
                FieldKind::Select(PRIORITY_OPTIONS),
            ),
            "normal",
        ),
        field("referral_date", "Referral Date", "Scheduling", FieldKind::Date),
        field("appointment_date", "Appointment Date", "Scheduling", FieldKind::Date),
        field("due_date", "Due Date", "Scheduling", FieldKind::Date),
        field("reason", "Reason", "Clinical", FieldKind::TextArea),
        field("diagnosis_code", "Diagnosis Code", "Clinical", FieldKind::Text),
        field("service_requested", "Service Requested", "Clinical", FieldKind::Text),
        field("clinical_summary", "Clinical Summary", "Clinical", FieldKind::TextArea),
        field(
            "authorization_required",
            "Authorization Required",
            "Authorization",
            FieldKind::Checkbox,
        ),
        field("authorization_number", "Authorization Number", "Authorization", FieldKind::Text),
        field(
            "insurance_verification",
            "Insurance Verified",
            "Authorization",
            FieldKind::Checkbox,
        ),
        field("notes", "Notes", "Notes", FieldKind::TextArea),
    ],
    filters: &[
        FilterDef {
            key: "referral_type",
            label: "Referral Type",
            kind: FilterKind::Reference(ReferenceList::ReferralTypes),
        },
        FilterDef {
            key: "status",
            label: "Status",
            kind: FilterKind::Reference(ReferenceList::ReferralStatuses),
        },
        FilterDef {
            key: "priority",
            label: "Priority",
            kind: FilterKind::Select(PRIORITY_OPTIONS),
        },
        FilterDef { key: "created_after", label: "Created After", kind: FilterKind::Date },
        FilterDef { key: "due_before", label: "Due Before", kind: FilterKind::Date },
    ],
};

static SERVICES: EntityDescriptor = EntityDescriptor {
    slug: "services",
    title: "Service Management",
    singular: "service",
    description: "Manage healthcare services and programs",
    identity: &["pkserviceid", "id"],
    columns: &[
        text_col("name", "Name"),
        text_col("service_type", "Type"),
        text_col("category", "Category"),
        text_col("service_code", "Code"),
        text_col("price", "Price"),
        text_col("status", "Status"),
    ],
    fields: &[
        required(field("name", "Name", "Service", FieldKind::Text)),
        field("description", "Description", "Service", FieldKind::TextArea),
        with_default(
            field(
                "service_type",
                "Service Type",
                "Service",
                FieldKind::Select(SERVICE_TYPE_OPTIONS),
            ),
            "medical",
        ),
        with_default(
            field(
                "category",
                "Category",
                "Service",
                FieldKind::Select(SERVICE_CATEGORY_OPTIONS),
            ),
            "primary_care",
        ),
        field("service_code", "Service Code", "Coding", FieldKind::Text),
        field("cpt_code", "CPT Code", "Coding", FieldKind::Text),
        field("hcpcs_code", "HCPCS Code", "Coding", FieldKind::Text),
        field("billing_code", "Billing Code", "Coding", FieldKind::Text),
        field("revenue_code", "Revenue Code", "Coding", FieldKind::Text),
        field("modifier_codes", "Modifier Codes", "Coding", FieldKind::Text),
        field("price", "Price", "Billing", FieldKind::Number),
        field("duration_minutes", "Duration (minutes)", "Billing", FieldKind::Number),
        with_default(
            field("unit_of_measure", "Unit of Measure", "Billing", FieldKind::Text),
            "visit",
        ),
        field("max_units_per_day", "Max Units / Day", "Billing", FieldKind::Number),
        field("frequency_limit", "Frequency Limit", "Billing", FieldKind::Text),
        field(
            "requires_authorization",
            "Requires Authorization",
            "Eligibility",
            FieldKind::Checkbox,
        ),
        field("requires_referral", "Requires Referral", "Eligibility", FieldKind::Checkbox),
        field(
            "telehealth_eligible",
            "Telehealth Eligible",
            "Eligibility",
            FieldKind::Checkbox,
        ),
        field("age_restrictions", "Age Restrictions", "Eligibility", FieldKind::Text),
        field("gender_restrictions", "Gender Restrictions", "Eligibility", FieldKind::Text),
        with_default(
            field("status", "Status", "Instructions", FieldKind::Select(STATUS_OPTIONS)),
            "active",
        ),
        field(
            "provider_instructions",
            "Provider Instructions",
            "Instructions",
            FieldKind::TextArea,
        ),
        field(
            "patient_instructions",
            "Patient Instructions",
            "Instructions",
            FieldKind::TextArea,
        ),
        field("prerequisites", "Prerequisites", "Instructions", FieldKind::TextArea),
        field("contraindications", "Contraindications", "Instructions", FieldKind::TextArea),
    ],
    filters: &[
        FilterDef {
            key: "service_type",
            label: "Service Type",
            kind: FilterKind::Select(SERVICE_TYPE_OPTIONS),
        },
        FilterDef {
            key: "category",
            label: "Category",
            kind: FilterKind::Select(SERVICE_CATEGORY_OPTIONS),
        },
        FilterDef { key: "status", label: "Status", kind: FilterKind::Select(STATUS_OPTIONS) },
        FilterDef {
            key: "requires_authorization",
            label: "Requires Authorization",
            kind: FilterKind::Select(YES_NO_OPTIONS),
        },
    ],
};

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn identity_prefers_domain_key_over_legacy_id() {
        let record: Record =
            serde_json::from_value(json!({"pkclientid": 12, "id": 4, "name": "A"})).unwrap();
        assert_eq!(
            EntityKind::Clients.descriptor().identity_of(&record),
            Some("12".to_string())
        );
    }

    #[test]
    fn identity_falls_back_to_legacy_id() {
        let record: Record = serde_json::from_value(json!({"id": 4})).unwrap();
        assert_eq!(
            EntityKind::Patients.descriptor().identity_of(&record),
            Some("4".to_string())
        );
    }

    #[test]
    fn only_referrals_need_reference_data() {
        for kind in EntityKind::ALL {
            let needs = kind.descriptor().needs_reference_data();
            assert_eq!(needs, kind == EntityKind::Referrals, "{:?}", kind);
        }
    }

    #[test]
    fn every_descriptor_has_a_required_field_and_legacy_id_fallback() {
        for kind in EntityKind::ALL {
            let descriptor = kind.descriptor();
            assert!(descriptor.fields.iter().any(|field| field.required));
            assert_eq!(descriptor.identity.last(), Some(&"id"));
        }
    }
}
