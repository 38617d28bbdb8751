//! Definitions of the Solidity interface used during deployment

use alloy_sol_types::sol;

sol! {
    contract FlashLoanArbitrage {
        constructor(address addressesProvider, address dexAggregator, uint256 protocolFee);
    }
}
