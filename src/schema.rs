diesel::table! {
    accounts (id) {
        id -> Text,
        user_id -> Text,
        name -> Text,
        bank_name -> Text,
        balance -> Text,
        currency -> Text,
        is_active -> Bool,
        created_at -> Timestamp,
        updated_at -> Timestamp,
    }
}

diesel::table! {
    investments (id) {
        id -> Text,
        user_id -> Text,
        name -> Text,
        investment_type -> Text,
        quantity -> Text,
        purchase_price -> Text,
        current_price -> Text,
        account_id -> Nullable<Text>,
        created_at -> Timestamp,
        updated_at -> Timestamp,
    }
}

diesel::table! {
    debts (id) {
        id -> Text,
        user_id -> Text,
        borrower_name -> Text,
        amount -> Text,
        interest_rate -> Text,
        lent_date -> Date,
        due_date -> Nullable<Date>,
        status -> Text,
        created_at -> Timestamp,
        updated_at -> Timestamp,
    }
}

diesel::table! {
    debt_repayments (id) {
        id -> Text,
        debt_id -> Text,
        amount -> Text,
        repayment_date -> Date,
        created_at -> Timestamp,
    }
}

diesel::table! {
    networth_inclusions (id) {
        id -> Text,
        user_id -> Text,
        entity_type -> Text,
        entity_id -> Text,
        include_in_net_worth -> Bool,
        created_at -> Timestamp,
        updated_at -> Timestamp,
    }
}

diesel::table! {
    networth_history (id) {
        id -> Text,
        user_id -> Text,
        snapshot_date -> Date,
        total_account_balance -> Text,
        total_investment_value -> Text,
        total_investment_cost -> Text,
        total_investment_gain -> Text,
        total_investment_gain_percentage -> Text,
        total_money_lent -> Text,
        total_assets -> Text,
        net_worth -> Text,
        currency -> Text,
        record_type -> Text,
        created_at -> Timestamp,
        updated_at -> Timestamp,
    }
}

diesel::table! {
    user_settings (user_id, setting_key) {
        user_id -> Text,
        setting_key -> Text,
        setting_value -> Text,
    }
}

diesel::joinable!(investments -> accounts (account_id));
diesel::joinable!(debt_repayments -> debts (debt_id));

diesel::allow_tables_to_appear_in_same_query!(
    accounts,
    investments,
    debts,
    debt_repayments,
    networth_inclusions,
    networth_history,
    user_settings,
);
