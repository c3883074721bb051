#[cfg(all(feature = "es", feature = "en"))]
compile_error!("Cannot enable both 'es' and 'en' features at the same time");

#[cfg(not(any(feature = "es", feature = "en")))]
compile_error!("Enable one of the 'es' or 'en' features");

#[cfg(feature = "es")]
pub mod strings {
    use std::fmt::Display;

    pub const MEMBER: &str = "Persona";
    pub const PAID: &str = "Pagó";
    pub const BALANCE: &str = "Balance";
    pub const STATUS: &str = "Estado";
    pub const FROM: &str = "Debe";
    pub const TO: &str = "A";
    pub const AMOUNT: &str = "Monto";
    pub const TITLE: &str = "Título";
    pub const PAYER: &str = "Pagó";
    pub const DATE: &str = "Fecha";
    pub const ID: &str = "Id";
    pub const CATEGORY: &str = "Categoría";
    pub const COUNT: &str = "Gastos";
    pub const TOTAL: &str = "Total gastado";
    pub const AVERAGE_PER_MEMBER: &str = "Promedio por persona";
    pub const DAILY_AVERAGE: &str = "Promedio diario";
    pub const DAYS: &str = "Días";
    pub const BALANCES_HEADING: &str = "Balance";
    pub const DEBTS_HEADING: &str = "Deudas";
    pub const EXPENSES_HEADING: &str = "Resumen de Gastos";
    pub const PERIOD_HEADING: &str = "Reporte del Período";
    pub const CATEGORIES_HEADING: &str = "Gastos por Categoría";
    pub const NO_DEBTS: &str = "No hay deudas";
    pub const NO_EXPENSES: &str = "No hay gastos registrados";
    pub const SETTLED: &str = "Al día";
    pub const CATEGORY_FOOD: &str = "Comida";
    pub const CATEGORY_RESTAURANTS: &str = "Restaurantes";
    pub const CATEGORY_TRANSPORT: &str = "Transporte";
    pub const CATEGORY_OTHER: &str = "Otros";
    pub const EXPENSE_HEADING: &str = "Detalle del Gasto";
    pub const PARTICIPANTS: &str = "Participantes";
    pub const EVERYONE: &str = "Todos";
    pub const RECEIPT: &str = "Recibo";
    pub const NO_RECEIPT: &str = "Sin recibo";
    pub const RECEIPTS_HEADING: &str = "Galería de Recibos";
    pub const NO_RECEIPTS: &str = "No hay recibos registrados";

    pub fn is_owed(amount: impl Display) -> String {
        format!("Le deben ${amount}")
    }

    pub fn owes(amount: impl Display) -> String {
        format!("Debe ${amount}")
    }

    pub fn period(start: impl Display, end: impl Display) -> String {
        format!("Período: {start} a {end}")
    }

    pub fn expense_added(id: impl Display) -> String {
        format!("Gasto registrado ({id})")
    }

    pub fn expense_removed(id: impl Display) -> String {
        format!("Gasto eliminado ({id})")
    }

    pub fn expense_not_found(id: impl Display) -> String {
        format!("No existe un gasto con id {id}")
    }

    pub fn receipt_count(count: usize) -> String {
        format!("{count} recibos registrados")
    }
}

#[cfg(feature = "en")]
pub mod strings {
    use std::fmt::Display;

    pub const MEMBER: &str = "Member";
    pub const PAID: &str = "Paid";
    pub const BALANCE: &str = "Balance";
    pub const STATUS: &str = "Status";
    pub const FROM: &str = "From";
    pub const TO: &str = "To";
    pub const AMOUNT: &str = "Amount";
    pub const TITLE: &str = "Title";
    pub const PAYER: &str = "Paid by";
    pub const DATE: &str = "Date";
    pub const ID: &str = "Id";
    pub const CATEGORY: &str = "Category";
    pub const COUNT: &str = "Expenses";
    pub const TOTAL: &str = "Total spent";
    pub const AVERAGE_PER_MEMBER: &str = "Average per member";
    pub const DAILY_AVERAGE: &str = "Daily average";
    pub const DAYS: &str = "Days";
    pub const BALANCES_HEADING: &str = "Balances";
    pub const DEBTS_HEADING: &str = "Debts";
    pub const EXPENSES_HEADING: &str = "Expense Summary";
    pub const PERIOD_HEADING: &str = "Period Report";
    pub const CATEGORIES_HEADING: &str = "Spending by Category";
    pub const NO_DEBTS: &str = "No debts";
    pub const NO_EXPENSES: &str = "No expenses recorded";
    pub const SETTLED: &str = "Settled";
    pub const CATEGORY_FOOD: &str = "Food";
    pub const CATEGORY_RESTAURANTS: &str = "Restaurants";
    pub const CATEGORY_TRANSPORT: &str = "Transport";
    pub const CATEGORY_OTHER: &str = "Other";
    pub const EXPENSE_HEADING: &str = "Expense Detail";
    pub const PARTICIPANTS: &str = "Participants";
    pub const EVERYONE: &str = "Everyone";
    pub const RECEIPT: &str = "Receipt";
    pub const NO_RECEIPT: &str = "No receipt";
    pub const RECEIPTS_HEADING: &str = "Receipt Gallery";
    pub const NO_RECEIPTS: &str = "No receipts recorded";

    pub fn is_owed(amount: impl Display) -> String {
        format!("Is owed ${amount}")
    }

    pub fn owes(amount: impl Display) -> String {
        format!("Owes ${amount}")
    }

    pub fn period(start: impl Display, end: impl Display) -> String {
        format!("Period: {start} to {end}")
    }

    pub fn expense_added(id: impl Display) -> String {
        format!("Expense recorded ({id})")
    }

    pub fn expense_removed(id: impl Display) -> String {
        format!("Expense removed ({id})")
    }

    pub fn expense_not_found(id: impl Display) -> String {
        format!("No expense with id {id}")
    }

    pub fn receipt_count(count: usize) -> String {
        format!("{count} receipts recorded")
    }
}

pub use strings::*;
