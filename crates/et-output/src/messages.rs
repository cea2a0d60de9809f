//! pt-BR user-facing messages.

use et_calc::{AutofillState, Field, SubmitError, ValidationError};

pub const MISSING_CITIES: &str = "Por favor, preencha as cidades de origem e destino.";
pub const MISSING_MODE: &str = "Selecione um meio de transporte.";
pub const INVALID_DISTANCE: &str = "A distância deve ser um número válido maior que zero.";
pub const UNKNOWN_MODE: &str = "Modo de transporte inválido.";
pub const PENDING: &str = "Aguarde: um cálculo já está em andamento.";
pub const ROUTE_NOT_FOUND: &str = "Rota não encontrada. Insira manualmente ou marque a caixa.";

pub const AUTOFILL_RESOLVED: &str = "Distância calculada automaticamente! ✅";
pub const AUTOFILL_MANUAL: &str = "Modo manual ativado. Insira a distância.";

pub const TIP: &str =
    "💡 Dica: Em viagens curtas (< 5km), bicicleta ou caminhada emitem 0 kg de CO₂!";
pub const OFFSET_INFO: &str = "🌱 Compense sua pegada: a aquisição de créditos de carbono \
financia projetos de reflorestamento e energia renovável. O valor apresentado é uma \
estimativa de mercado.";
pub const CREDIT_BASIS: &str = "Base: 1 crédito = 1 tonelada CO₂";

/// Shown when the user asks to pay for an offset.  There is no payment
/// integration.
pub const PAY_STUB: &str = "Integração com gateway de pagamento em breve!";

/// Message for a refused calculation.
pub fn validation_message(error: &ValidationError) -> &'static str {
    match error {
        ValidationError::MissingField(Field::Origin | Field::Destination) => MISSING_CITIES,
        ValidationError::MissingField(Field::Mode) => MISSING_MODE,
        ValidationError::InvalidDistance(_) => INVALID_DISTANCE,
        ValidationError::UnknownMode(_) => UNKNOWN_MODE,
    }
}

/// Message for a submission that produced no result.
pub fn submit_message(error: &SubmitError) -> &'static str {
    match error {
        SubmitError::Pending => PENDING,
        SubmitError::RouteNotFound { .. } => ROUTE_NOT_FOUND,
        SubmitError::Invalid(e) => validation_message(e),
    }
}

/// Helper text under the distance field.  `None` leaves it unchanged.
pub fn autofill_hint(state: &AutofillState) -> Option<&'static str> {
    match state {
        AutofillState::Resolved(_) => Some(AUTOFILL_RESOLVED),
        AutofillState::NotFound    => Some(ROUTE_NOT_FOUND),
        AutofillState::Manual      => Some(AUTOFILL_MANUAL),
        AutofillState::Incomplete  => None,
    }
}
