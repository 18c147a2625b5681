use serde::de::{self, Deserializer, Unexpected, Visitor};
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;

// ============================================================================
// Role
// ============================================================================

/// Employee role as stored by the backend (`rol` column, codes 0..=4).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Role {
    /// Signed in but not yet given a role by an administrator.
    #[default]
    Unassigned,
    Administrator,
    Manager,
    Commercial,
    WarehouseManager,
}

impl Role {
    pub const ALL: [Role; 5] = [
        Role::Unassigned,
        Role::Administrator,
        Role::Manager,
        Role::Commercial,
        Role::WarehouseManager,
    ];

    pub fn from_code(code: i64) -> Option<Role> {
        match code {
            0 => Some(Role::Unassigned),
            1 => Some(Role::Administrator),
            2 => Some(Role::Manager),
            3 => Some(Role::Commercial),
            4 => Some(Role::WarehouseManager),
            _ => None,
        }
    }

    pub fn code(&self) -> i64 {
        match self {
            Role::Unassigned => 0,
            Role::Administrator => 1,
            Role::Manager => 2,
            Role::Commercial => 3,
            Role::WarehouseManager => 4,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Role::Unassigned => "Ninguno",
            Role::Administrator => "Administrador",
            Role::Manager => "Manager",
            Role::Commercial => "Comercial",
            Role::WarehouseManager => "Jefe de almacen",
        }
    }

    pub fn can(&self, capability: Capability) -> bool {
        use Capability::*;
        match capability {
            ViewHome => true,
            AdministerUsers => matches!(self, Role::Administrator),
            ManageProducts => matches!(
                self,
                Role::Administrator | Role::Manager | Role::WarehouseManager
            ),
            DownloadInvoicePdf => matches!(self, Role::Administrator | Role::Commercial),
            ViewProducts | ViewClients | ViewOffers | ViewOrders | ViewDeliveryNotes
            | ViewInvoices | CreateClient | EditClient | CreateOffer | EditOffer
            | ConvertOfferToOrder | ConvertOrderToDeliveryNote
            | ConvertDeliveryNoteToInvoice | DownloadOfferPdf | DownloadOrderPdf
            | DownloadDeliveryNotePdf => self.is_staff(),
        }
    }

    /// Any assigned role.
    pub fn is_staff(&self) -> bool {
        !matches!(self, Role::Unassigned)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl Serialize for Role {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_i64(self.code())
    }
}

struct RoleVisitor;

impl<'de> Visitor<'de> for RoleVisitor {
    type Value = Role;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a role code as integer or string")
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Role, E> {
        Ok(Role::from_code(v).unwrap_or_default())
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Role, E> {
        Ok(i64::try_from(v)
            .ok()
            .and_then(Role::from_code)
            .unwrap_or_default())
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Role, E> {
        let trimmed = v.trim();
        if trimmed.is_empty() {
            return Ok(Role::Unassigned);
        }
        trimmed
            .parse::<i64>()
            .map(|code| Role::from_code(code).unwrap_or_default())
            .map_err(|_| E::invalid_value(Unexpected::Str(v), &self))
    }

    fn visit_unit<E: de::Error>(self) -> Result<Role, E> {
        Ok(Role::Unassigned)
    }

    fn visit_none<E: de::Error>(self) -> Result<Role, E> {
        Ok(Role::Unassigned)
    }
}

/// Accepts `1`, `"1"` and `null`. Codes outside 0..=4 fall back to `Unassigned`.
impl<'de> Deserialize<'de> for Role {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(RoleVisitor)
    }
}

// ============================================================================
// Capability
// ============================================================================

/// A console section or action that may be gated by role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Capability {
    ViewHome,
    ViewProducts,
    ViewClients,
    ViewOffers,
    ViewOrders,
    ViewDeliveryNotes,
    ViewInvoices,
    ManageProducts,
    CreateClient,
    EditClient,
    CreateOffer,
    EditOffer,
    ConvertOfferToOrder,
    ConvertOrderToDeliveryNote,
    ConvertDeliveryNoteToInvoice,
    DownloadOfferPdf,
    DownloadOrderPdf,
    DownloadDeliveryNotePdf,
    DownloadInvoicePdf,
    AdministerUsers,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_round_trip() {
        for role in Role::ALL {
            assert_eq!(Role::from_code(role.code()), Some(role));
        }
        assert_eq!(Role::from_code(9), None);
        assert_eq!(Role::WarehouseManager.label(), "Jefe de almacen");
    }

    #[test]
    fn deserialises_numbers_and_strings() {
        let r: Role = serde_json::from_str("\"1\"").unwrap();
        assert_eq!(r, Role::Administrator);
        let r: Role = serde_json::from_str("3").unwrap();
        assert_eq!(r, Role::Commercial);
        let r: Role = serde_json::from_str("null").unwrap();
        assert_eq!(r, Role::Unassigned);
        let r: Role = serde_json::from_str("\"7\"").unwrap();
        assert_eq!(r, Role::Unassigned);
        assert!(serde_json::from_str::<Role>("\"admin\"").is_err());
    }

    #[test]
    fn serialises_as_code() {
        assert_eq!(serde_json::to_string(&Role::Manager).unwrap(), "2");
    }

    #[test]
    fn unassigned_sees_only_home() {
        let role = Role::Unassigned;
        assert!(role.can(Capability::ViewHome));
        assert!(!role.can(Capability::ViewProducts));
        assert!(!role.can(Capability::ViewOffers));
        assert!(!role.can(Capability::AdministerUsers));
    }

    #[test]
    fn product_management_excludes_commercial() {
        assert!(Role::Administrator.can(Capability::ManageProducts));
        assert!(Role::Manager.can(Capability::ManageProducts));
        assert!(Role::WarehouseManager.can(Capability::ManageProducts));
        assert!(!Role::Commercial.can(Capability::ManageProducts));
        assert!(Role::Commercial.can(Capability::ViewProducts));
    }

    #[test]
    fn invoice_pdf_is_admin_or_commercial() {
        assert!(Role::Administrator.can(Capability::DownloadInvoicePdf));
        assert!(Role::Commercial.can(Capability::DownloadInvoicePdf));
        assert!(!Role::Manager.can(Capability::DownloadInvoicePdf));
        assert!(!Role::WarehouseManager.can(Capability::DownloadInvoicePdf));
        assert!(Role::WarehouseManager.can(Capability::DownloadDeliveryNotePdf));
    }

    #[test]
    fn only_admin_administers_users() {
        let admins: Vec<Role> = Role::ALL
            .into_iter()
            .filter(|r| r.can(Capability::AdministerUsers))
            .collect();
        assert_eq!(admins, vec![Role::Administrator]);
    }
}
