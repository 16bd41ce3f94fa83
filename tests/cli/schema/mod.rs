mod follows_visibility_contract;
