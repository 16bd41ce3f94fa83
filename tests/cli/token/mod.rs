mod prints_alphanumeric_token_contract;
