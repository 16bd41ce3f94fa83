mod requires_terminal_contract;
