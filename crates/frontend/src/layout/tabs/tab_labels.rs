//! Tab labels: the single source of truth for tab titles.

use super::registry::{offer_editor_id, FORBIDDEN_KEY, HOME_KEY, OFFER_EDITOR_KEY};

/// Readable title for a tab key. Unknown keys get the not-found title.
pub fn tab_label_for_key(key: &str) -> String {
    let label = match key {
        HOME_KEY => "Inicio",
        FORBIDDEN_KEY => "Acceso denegado",

        // ── Catálogo ──────────────────────────────────────────────────────
        "a001_product" => "Productos",
        "a002_client" => "Clientes",

        // ── Ventas ────────────────────────────────────────────────────────
        "a003_offer" => "Ofertas",
        OFFER_EDITOR_KEY => "Nueva oferta",
        "a004_order" => "Pedidos",
        "a005_delivery_note" => "Albaranes",
        "a006_invoice" => "Facturas",

        // ── Administración ────────────────────────────────────────────────
        "sys_users" => "Usuarios",

        k => match offer_editor_id(k) {
            Some(id) => return format!("Editar oferta {}", id),
            None => "Página no encontrada",
        },
    };
    label.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels() {
        assert_eq!(tab_label_for_key("a005_delivery_note"), "Albaranes");
        assert_eq!(tab_label_for_key("a003_offer_editor"), "Nueva oferta");
        assert_eq!(tab_label_for_key("a003_offer_editor_12"), "Editar oferta 12");
        assert_eq!(tab_label_for_key("nope"), "Página no encontrada");
    }
}
