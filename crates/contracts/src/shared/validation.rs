use thiserror::Error;

/// Form validation failures. Messages are shown to the user verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("El campo «{0}» es obligatorio.")]
    Required(&'static str),

    #[error("Por favor, completa todos los campos.")]
    IncompleteForm,

    #[error("El campo «{0}» debe ser un número entero.")]
    NotAnInteger(&'static str),

    #[error("El campo «{0}» debe ser un número.")]
    NotANumber(&'static str),

    #[error("El campo «{0}» no puede ser negativo.")]
    Negative(&'static str),

    #[error("El stock mínimo no puede superar al stock máximo.")]
    MinAboveMax,

    #[error("El stock debe estar entre el mínimo y el máximo.")]
    StockOutOfRange,

    #[error("El email no es válido.")]
    InvalidEmail,

    #[error("La cantidad debe ser mayor que 0.")]
    InvalidQuantity,

    #[error("No puede haber productos con cantidad 0 o menor.")]
    NonPositiveLine,

    #[error("Este producto ya ha sido añadido.")]
    DuplicateProduct,

    #[error("Selecciona un cliente y añade al menos un producto.")]
    MissingClientOrLines,

    #[error("Añade al menos un producto.")]
    NoLines,

    #[error("Línea inexistente.")]
    UnknownLine,
}
